//! nanobanana - Gemini image generation CLI.

mod auth;
mod cli;
mod error;
mod gemini;
mod output;

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::gemini::GeminiClient;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    };

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), error::ImageError> {
    let api_key = auth::resolve_api_key()?;
    let client = GeminiClient::new(api_key);

    eprintln!("Generating: {}...", truncate(&cli.prompt, 50));

    let body = client.generate(&cli.prompt).await?;

    match gemini::extract_inline_image(&body) {
        Ok(image) => {
            let path = Path::new(&cli.output_path);
            output::write_image(path, &image.bytes)?;
            println!("Saved: {} ({} bytes)", path.display(), image.bytes.len());
        }
        Err(e) => {
            // A 200 response without a usable image is reported with the raw
            // body but leaves the exit code untouched.
            eprintln!("Error: {e}");
            eprintln!("{body}");
        }
    }

    Ok(())
}

/// Take the first `max` characters of a prompt for the progress line.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("a cat", 50), "a cat");
    }

    #[test]
    fn truncate_cuts_at_fifty_chars() {
        let long = "x".repeat(80);
        assert_eq!(truncate(&long, 50).len(), 50);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let prompt = "é".repeat(60);
        assert_eq!(truncate(&prompt, 50).chars().count(), 50);
    }
}
