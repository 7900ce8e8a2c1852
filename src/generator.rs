use crate::cli::Cli;
use crate::image::{self, EmbeddedImage, DEFAULT_IMAGES};
use crate::template;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub embedded: usize,
    pub placeholders: Vec<String>,
}

pub fn run(cli: &Cli) -> Result<()> {
    if !cli.quiet {
        eprintln!("🛰️  Forest Carbon Page Generator");
        eprintln!("{}", "=".repeat(40));
    }

    let dir = resolve_image_dir(cli)?;
    let filenames = resolve_filenames(cli);
    log::info!("Looking for images in: {}", dir.display());

    let report = generate(&dir, &filenames, &cli.output)?;

    if !cli.quiet {
        print_summary(&report, filenames.len());
    }

    Ok(())
}

/// Encodes `filenames` found under `dir`, renders the page and writes it to
/// `output`, replacing whatever was there.
pub fn generate(dir: &Path, filenames: &[String], output: &Path) -> Result<GenerationReport> {
    let images = image::collect_images(dir, filenames);
    let html = template::render_page(&images)?;

    write_output(output, &html)?;

    Ok(GenerationReport {
        output_path: output.to_path_buf(),
        bytes_written: html.len(),
        embedded: images.iter().filter(|i| i.is_embedded()).count(),
        placeholders: placeholder_names(&images),
    })
}

fn resolve_image_dir(cli: &Cli) -> Result<PathBuf> {
    match cli.dir {
        Some(ref dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn resolve_filenames(cli: &Cli) -> Vec<String> {
    if cli.images.is_empty() {
        DEFAULT_IMAGES.iter().map(|f| f.to_string()).collect()
    } else {
        cli.images.clone()
    }
}

fn placeholder_names(images: &[EmbeddedImage]) -> Vec<String> {
    images
        .iter()
        .filter(|i| !i.is_embedded())
        .map(|i| i.filename.clone())
        .collect()
}

fn write_output(output_path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(output_path, html)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    Ok(())
}

fn print_summary(report: &GenerationReport, listed: usize) {
    let output = report.output_path.display();

    eprintln!();
    eprintln!("✅ Success! Generated: {}", output);
    eprintln!("📂 File size: {:.1} KB", report.bytes_written as f64 / 1024.0);
    eprintln!("🖼️  Embedded {} of {} images", report.embedded, listed);
    if !report.placeholders.is_empty() {
        eprintln!("   Placeholders used for: {}", report.placeholders.join(", "));
    }
    eprintln!("🌐 Open {} in your browser to view the page", output);
    eprintln!();
    eprintln!("📤 Ready to host online:");
    eprintln!("   • Drag & drop to netlify.com/drop");
    eprintln!("   • Upload to GitHub Pages");
    eprintln!("   • Use with any web hosting service");
}
