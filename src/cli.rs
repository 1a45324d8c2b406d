//! CLI argument parsing with clap.

use clap::Parser;

/// Generate an image from a text prompt with Gemini (Nano Banana Pro).
#[derive(Parser, Debug)]
#[command(name = "nanobanana", version, about)]
pub struct Cli {
    /// Text prompt describing the desired image.
    pub prompt: String,

    /// File the decoded image is written to. Parent directories are
    /// created if missing.
    pub output_path: String,
}
