//! Interfaces to the surrounding assistant toolchain.
//!
//! The design pipeline is one tool among several hosted by an outer layer
//! that routes user input. These traits describe the collaborators that
//! layer wires together; beadify only consumes their outputs -- the design
//! pipeline runs once routing has produced a resolvable image URL. No
//! implementations live in this repository.

use thiserror::Error;

/// Failure reported by any collaborator call.
#[derive(Debug, Error)]
#[error("Collaborator error: {0}")]
pub struct CollaboratorError(pub String);

/// How the hosting layer routed a piece of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRoute {
    /// A resolvable image URL -- hand off to the design pipeline.
    ImageUrl,
    /// A named entity to look up features for before generating an image.
    EntityName,
    /// Free-text description to enrich before generating an image.
    Description,
}

/// Classifies raw user input ahead of dispatch.
pub trait InputRouter {
    fn classify(&self, input: &str) -> InputRoute;
}

/// Expands a terse description into a richer image-generation prompt.
pub trait DescriptionEnricher {
    fn enrich(&self, description: &str) -> Result<String, CollaboratorError>;
}

/// Looks up descriptive features for a named entity.
pub trait FeatureSource {
    fn features(&self, entity: &str) -> Result<String, CollaboratorError>;
}

/// Produces an image URL from a prompt; the typical producer of the
/// design pipeline's input.
pub trait ImageGenerator {
    fn generate(&self, prompt: &str) -> Result<String, CollaboratorError>;
}
