use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use microcopy::clipboard;
use microcopy::config;
use microcopy::structs::Tone;
use microcopy::MicrocopyClient;

/// Generate alternative phrasings for a piece of UI text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to rewrite
    text: String,

    /// Tone: friendly, formal, persuasive or casual
    #[arg(short, long, default_value = "formal")]
    tone: String,

    /// Copy the Nth alternative (1-based) to the clipboard
    #[arg(short, long)]
    copy: Option<usize>,

    /// Backend base URL (overrides MICROCOPY_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let text = cli.text.trim();
    if text.is_empty() {
        anyhow::bail!("Please enter some text.");
    }

    let tone: Tone = cli.tone.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let base_url = config::resolve_base_url(cli.api_url.as_deref());
    info!("Using backend at {base_url}");

    let client = MicrocopyClient::new(base_url);
    let alternatives = client.generate(text, tone).await?;

    if alternatives.is_empty() {
        println!("No alternatives returned.");
        return Ok(());
    }

    for (i, alt) in alternatives.iter().enumerate() {
        println!("{}. {}", i + 1, alt);
    }

    if let Some(n) = cli.copy {
        let chosen = n
            .checked_sub(1)
            .and_then(|i| alternatives.get(i))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "--copy {n} is out of range (got {} alternatives)",
                    alternatives.len()
                )
            })?;
        clipboard::copy_to_clipboard(chosen)?;
        println!("Copied alternative {n} to clipboard.");
    }

    Ok(())
}
