use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "forest_carbon_blog.html";

/// Bundle local images into a single self-contained HTML page
#[derive(Parser, Debug)]
#[command(name = "pagepack", version, about)]
pub struct Cli {
    /// Image filenames to embed, relative to --dir.
    /// Defaults to the images the bundled page expects.
    pub images: Vec<String>,

    /// Directory to look for images in. Defaults to the current directory.
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Path of the generated HTML file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Do not print the banner and summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
