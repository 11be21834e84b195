//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use campusdoc_canvas::render_canvas;
use campusdoc_core::{render_preview, segment, strip_markup};
use campusdoc_pdf::render_pdf;

use crate::settings::load_settings;

/// Output format for the preview command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PreviewFormat {
    /// Human-readable tree dump
    #[default]
    Text,
    /// JSON visual tree for UI consumption
    Json,
}

#[derive(Parser)]
#[command(name = "campusdoc")]
#[command(author, version, about = "Render generated college documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the preview visual tree for a document
    Preview {
        /// Input document file (mini markup text)
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: PreviewFormat,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Export a document as a paginated A4 PDF
    ExportPdf {
        /// Input document file
        input: PathBuf,

        /// Output PDF file (defaults to input with .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Export a document as a single fixed-size HTML canvas page
    ExportCanvas {
        /// Input document file
        input: PathBuf,

        /// Output HTML file (defaults to input with .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Export a document as plain text with table markers stripped
    ExportText {
        /// Input document file
        input: PathBuf,

        /// Output text file (defaults to input with .txt extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { input, format, config } => {
            preview_command(&input, format, config.as_deref())?;
        }
        Commands::ExportPdf { input, output, config } => {
            export_pdf_command(&input, output.as_deref(), config.as_deref())?;
        }
        Commands::ExportCanvas { input, output, config } => {
            export_canvas_command(&input, output.as_deref(), config.as_deref())?;
        }
        Commands::ExportText { input, output } => {
            export_text_command(&input, output.as_deref())?;
        }
    }

    Ok(())
}

/// Execute the preview command
pub fn preview_command(
    input: &Path,
    format: PreviewFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let raw = read_document(input)?;
    let settings = load_settings(config_path)?;
    let letterhead = settings.resolve_letterhead();

    let doc = render_preview(&segment(&raw), &letterhead);

    match format {
        PreviewFormat::Json => {
            let json = serde_json::to_string_pretty(&doc)
                .context("Failed to serialize preview tree to JSON")?;
            println!("{}", json);
        }
        PreviewFormat::Text => {
            for node in &doc.nodes {
                println!("{:?}", node);
            }
        }
    }

    Ok(())
}

/// Execute the export-pdf command
pub fn export_pdf_command(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    println!("campusdoc v{}", campusdoc_core::VERSION);
    println!("Exporting PDF: {}", input.display());

    let raw = read_document(input)?;
    let settings = load_settings(config_path)?;
    let letterhead = settings.resolve_letterhead();
    let output_path = output_or_default(input, output, "pdf");

    let title = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let segments = segment(&raw);
    let bytes = render_pdf(&segments, &letterhead, &title)
        .with_context(|| format!("Failed to render PDF for {}", input.display()))?;

    fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!();
    println!("Export complete!");
    println!("  Output: {}", output_path.display());
    println!("  Size: {} bytes", bytes.len());

    Ok(())
}

/// Execute the export-canvas command
pub fn export_canvas_command(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    println!("campusdoc v{}", campusdoc_core::VERSION);
    println!("Exporting canvas page: {}", input.display());

    let raw = read_document(input)?;
    let settings = load_settings(config_path)?;
    let letterhead = settings.resolve_letterhead();
    let output_path = output_or_default(input, output, "html");

    let html = render_canvas(&segment(&raw), &letterhead);

    fs::write(&output_path, &html)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!();
    println!("Export complete!");
    println!("  Output: {}", output_path.display());
    println!("  Rasterize with an external screenshot tool to produce the image.");

    Ok(())
}

/// Execute the export-text command
pub fn export_text_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let raw = read_document(input)?;
    let output_path = output_or_default(input, output, "txt");

    let text = strip_markup(&raw);
    fs::write(&output_path, text)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Export complete: {}", output_path.display());
    Ok(())
}

/// Read the input document, enforcing the non-empty precondition shared by
/// every render action
fn read_document(input: &Path) -> Result<String> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if raw.trim().is_empty() {
        anyhow::bail!("Document is empty: {}", input.display());
    }
    Ok(raw)
}

fn output_or_default(input: &Path, output: Option<&Path>, extension: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(extension),
    }
}
