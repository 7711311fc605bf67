//! Palette struct with ordered entries and nearest-color matching.
//!
//! Entry order is part of the palette's contract: nearest-color ties are
//! resolved in favor of the earliest entry, so the palette is Vec-backed and
//! iterates exactly in construction order.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// One named reference color in a palette.
///
/// `hex` is the display form carried alongside the channel values. When an
/// entry is built from an existing color card document the document's hex
/// string is preserved verbatim; otherwise it is derived from `rgb`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Unique name within the palette (e.g. a bead color code).
    pub name: String,
    /// Reference color used for matching and rendering.
    pub rgb: Rgb,
    /// Hex form of the color, `#RRGGBB`.
    pub hex: String,
}

impl PaletteEntry {
    /// Create an entry, deriving the hex string from the color.
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
            hex: rgb.to_string(),
        }
    }

    /// Create an entry keeping a caller-supplied hex string verbatim.
    pub fn with_hex(name: impl Into<String>, rgb: Rgb, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rgb,
            hex: hex.into(),
        }
    }

    /// Create an entry by parsing a hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if the hex string is invalid.
    pub fn from_hex(name: impl Into<String>, hex: &str) -> Result<Self, PaletteError> {
        let rgb = Rgb::from_str(hex)?;
        Ok(Self {
            name: name.into(),
            rgb,
            hex: hex.trim().to_string(),
        })
    }
}

/// An ordered, non-empty collection of named reference colors.
///
/// # Ordering
///
/// [`find_nearest`](Palette::find_nearest) scans entries in construction
/// order and replaces the running best match only on a strictly smaller
/// distance, so when two entries are equidistant from an input color the
/// earlier one wins. This tie-break is observable in every design produced
/// from the palette and must survive any internal reorganization; entries
/// are therefore stored in a Vec, never a hash map.
///
/// # Example
///
/// ```
/// use bead_mosaic::{Palette, PaletteEntry, Rgb};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new("black", Rgb::new(0, 0, 0)),
///     PaletteEntry::new("white", Rgb::new(255, 255, 255)),
/// ]).unwrap();
///
/// let (idx, dist) = palette.find_nearest([0.0, 0.0, 0.0]);
/// assert_eq!(idx, 0);
/// assert_eq!(dist, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `entries` is empty ([`PaletteError::Empty`])
    /// - two entries share a name ([`PaletteError::DuplicateName`])
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(PaletteError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Create a palette from `(name, hex)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for an invalid hex string, plus
    /// the validation errors of [`Palette::new`].
    pub fn from_hex(colors: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let entries = colors
            .iter()
            .map(|(name, hex)| PaletteEntry::from_hex(*name, hex))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    ///
    /// Note: always `false` -- empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in iteration (construction) order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The entry at the given index.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Find the nearest entry to an averaged color.
    ///
    /// Distance is Euclidean in RGB space. Entries are scanned in palette
    /// order and the running best is replaced only on a strictly smaller
    /// distance, so equidistant entries resolve to the earliest one.
    ///
    /// Returns `(index, distance)` where `distance` is the Euclidean
    /// distance (not squared) to the winning entry.
    pub fn find_nearest(&self, average: [f64; 3]) -> (usize, f64) {
        // Squared distance is monotonic in the Euclidean distance, so the
        // strict-< comparison picks the identical winner without a sqrt per
        // entry.
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, entry) in self.entries.iter().enumerate() {
            let [r, g, b] = entry.rgb.to_f64();
            let dr = average[0] - r;
            let dg = average[1] - g;
            let db = average[2] - b;
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgbw_palette() -> Palette {
        Palette::new(vec![
            PaletteEntry::new("red", Rgb::new(255, 0, 0)),
            PaletteEntry::new("green", Rgb::new(0, 255, 0)),
            PaletteEntry::new("blue", Rgb::new(0, 0, 255)),
            PaletteEntry::new("white", Rgb::new(255, 255, 255)),
        ])
        .unwrap()
    }

    #[test]
    fn test_basic_construction() {
        let palette = rgbw_palette();
        assert_eq!(palette.len(), 4);
        assert!(!palette.is_empty());
        assert_eq!(palette.entry(0).name, "red");
    }

    #[test]
    fn test_empty_error() {
        let result = Palette::new(vec![]);
        assert!(matches!(result, Err(PaletteError::Empty)));
    }

    #[test]
    fn test_duplicate_name_error() {
        let result = Palette::new(vec![
            PaletteEntry::new("red", Rgb::new(255, 0, 0)),
            PaletteEntry::new("red", Rgb::new(200, 0, 0)),
        ]);
        assert!(matches!(
            result,
            Err(PaletteError::DuplicateName { name }) if name == "red"
        ));
    }

    #[test]
    fn test_order_preserved() {
        let palette = rgbw_palette();
        let names: Vec<&str> = palette.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["red", "green", "blue", "white"]);
    }

    #[test]
    fn test_entry_hex_derived() {
        let entry = PaletteEntry::new("sky", Rgb::new(0, 128, 255));
        assert_eq!(entry.hex, "#0080FF");
    }

    #[test]
    fn test_entry_hex_preserved() {
        let entry = PaletteEntry::with_hex("sky", Rgb::new(0, 128, 255), "#0080ff");
        assert_eq!(entry.hex, "#0080ff");
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(&[("black", "#000000"), ("white", "#FFF")]).unwrap();
        assert_eq!(palette.entry(1).rgb, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        let result = Palette::from_hex(&[("bad", "#GGGGGG")]);
        assert!(matches!(result, Err(PaletteError::ParseColor(_))));
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = rgbw_palette();
        let (idx, dist) = palette.find_nearest([0.0, 255.0, 0.0]);
        assert_eq!(idx, 1);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_find_nearest_closest_wins() {
        let palette = rgbw_palette();
        // Slightly reddish: much closer to red than to anything else
        let (idx, dist) = palette.find_nearest([240.0, 20.0, 10.0]);
        assert_eq!(idx, 0);
        assert!(dist > 0.0);
    }

    #[test]
    fn test_tie_break_earliest_entry_wins() {
        // Two entries with identical RGB: both at distance 0, first wins.
        let palette = Palette::new(vec![
            PaletteEntry::new("crimson", Rgb::new(200, 30, 30)),
            PaletteEntry::new("brick", Rgb::new(200, 30, 30)),
        ])
        .unwrap();

        let (idx, dist) = palette.find_nearest([200.0, 30.0, 30.0]);
        assert_eq!(idx, 0, "Equidistant entries must resolve to the earliest");
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_tie_break_equidistant_midpoint() {
        let palette = Palette::new(vec![
            PaletteEntry::new("black", Rgb::new(0, 0, 0)),
            PaletteEntry::new("white", Rgb::new(255, 255, 255)),
        ])
        .unwrap();

        // Exactly halfway between black and white on all channels.
        let (idx, _) = palette.find_nearest([127.5, 127.5, 127.5]);
        assert_eq!(idx, 0, "Midpoint must resolve to the earlier entry");
    }

    #[test]
    fn test_tie_break_survives_reordering() {
        let forward = Palette::new(vec![
            PaletteEntry::new("black", Rgb::new(0, 0, 0)),
            PaletteEntry::new("white", Rgb::new(255, 255, 255)),
        ])
        .unwrap();
        let reversed = Palette::new(vec![
            PaletteEntry::new("white", Rgb::new(255, 255, 255)),
            PaletteEntry::new("black", Rgb::new(0, 0, 0)),
        ])
        .unwrap();

        let mid = [127.5, 127.5, 127.5];
        assert_eq!(forward.entry(forward.find_nearest(mid).0).name, "black");
        assert_eq!(reversed.entry(reversed.find_nearest(mid).0).name, "white");
    }

    #[test]
    fn test_single_entry_palette() {
        let palette =
            Palette::new(vec![PaletteEntry::new("only", Rgb::new(10, 20, 30))]).unwrap();
        let (idx, dist) = palette.find_nearest([250.0, 250.0, 250.0]);
        assert_eq!(idx, 0);
        assert!(dist > 0.0);
    }
}
