use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beadify::models::{DesignReport, PaletteCatalog};
use beadify::services::{DesignOptions, DesignPipeline};

/// Default palette catalog location, relative to the working directory.
const DEFAULT_CATALOG: &str = "palettes/color_cards.json";

#[derive(Parser)]
#[command(name = "beadify")]
#[command(about = "Bead mosaic design generator with per-color bills of materials")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bead design from an image URL
    Design {
        /// Source image URL
        url: String,

        /// Palette catalog file (JSON color cards)
        #[arg(short, long, default_value = DEFAULT_CATALOG)]
        palette_file: PathBuf,

        /// Palette template to match against
        #[arg(short, long, default_value = "classic")]
        template: String,

        /// Output canvas path (default: bead_design_<timestamp>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draw color-name labels on the tiles
        #[arg(long)]
        labels: bool,

        /// Keep the canvas white instead of painting matched colors
        #[arg(long)]
        no_replace: bool,

        /// Upscale factor controlling tile granularity
        #[arg(short, long, default_value_t = 5)]
        magnification: u32,

        /// Tile edge length before magnification
        #[arg(long, default_value_t = 10)]
        base_tile: u32,

        /// Explicit label font file (TTF/OTF)
        #[arg(long)]
        font: Option<PathBuf>,

        /// Write the full design report as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// HTTP timeout for the source fetch, in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// List palette templates in a catalog file
    Palettes {
        /// Palette catalog file (JSON color cards)
        #[arg(short, long, default_value = DEFAULT_CATALOG)]
        palette_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Design {
            url,
            palette_file,
            template,
            output,
            labels,
            no_replace,
            magnification,
            base_tile,
            font,
            report,
            timeout,
        }) => run_design_command(
            &url,
            &palette_file,
            &template,
            output,
            labels,
            no_replace,
            magnification,
            base_tile,
            font,
            report,
            timeout,
        ),
        Some(Commands::Palettes { palette_file }) => run_palettes_command(&palette_file),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Generate a design and print the bill of materials.
#[allow(clippy::too_many_arguments)]
fn run_design_command(
    url: &str,
    palette_file: &PathBuf,
    template: &str,
    output: Option<PathBuf>,
    labels: bool,
    no_replace: bool,
    magnification: u32,
    base_tile: u32,
    font: Option<PathBuf>,
    report: Option<PathBuf>,
    timeout: u64,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let catalog = PaletteCatalog::load(palette_file)?;
    let palette = catalog.template(template)?;

    let render_requested = !no_replace || labels;
    let output_path = output.or_else(|| render_requested.then(default_output_path));

    let options = DesignOptions {
        magnification,
        base_tile,
        replace_colors: !no_replace,
        draw_labels: labels,
        output_path: output_path.clone(),
        font_path: font,
        timeout: Duration::from_secs(timeout),
    };

    let pipeline = DesignPipeline::new(palette, options)?;
    let design_report = pipeline.run(url)?;

    print_bill_of_materials(&design_report);
    if let Some(path) = &output_path {
        println!("Canvas written to {}", path.display());
    }

    if let Some(path) = &report {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &design_report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Default canvas file name, timestamped so repeated runs never collide.
fn default_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("bead_design_{timestamp}.png"))
}

fn print_bill_of_materials(report: &DesignReport) {
    println!("Bill of materials ({} beads):", report.total_beads);

    let mut rows: Vec<(&String, &u64)> = report.color_statistics.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (name, count) in rows {
        println!("  {count:>6}  {name}");
    }
}

/// List the templates available in a catalog file.
fn run_palettes_command(palette_file: &PathBuf) -> anyhow::Result<()> {
    let catalog = PaletteCatalog::load(palette_file)?;

    if catalog.is_empty() {
        println!("No palette templates in {}", palette_file.display());
        return Ok(());
    }

    println!("Palette templates in {}:", palette_file.display());
    for name in catalog.template_names() {
        let colors = catalog.color_count(name).unwrap_or(0);
        println!("  {name} ({colors} colors)");
    }

    Ok(())
}

/// Display usage information when no subcommand is given.
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Beadify v{VERSION}");
    println!("Bead mosaic design generator with per-color bills of materials\n");

    println!("Commands:");
    println!("  beadify design <URL>   Generate a bead design from an image URL");
    println!("  beadify palettes       List palette templates in a catalog");
    println!("\nRun 'beadify --help' for more details.");
}
