// Command-line front-end for the blog HTML normalizer
//
// Reads an HTML fragment from a file or stdin, normalizes its code blocks and
// writes the result to a file or stdout. Logs go to stderr.

use anyhow::{Context, Result, bail};
use blog_html_normalizer::utils::MAX_HTML_SIZE;
use blog_html_normalizer::{BlogHtmlNormalizer, NormalizerConfig, NormalizerConfigBuilder};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Rewrite rich-text editor code blocks into language-tagged containers
#[derive(Parser, Debug)]
#[command(name = "blog-html-normalize")]
#[command(version)]
struct Cli {
    /// HTML file to normalize (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON report (strategy, detected languages) instead of HTML
    #[arg(long)]
    report: bool,

    /// Tag untagged blocks with the fallback language instead of guessing
    #[arg(long)]
    no_detect: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<NormalizerConfig> {
    let config = match &cli.config {
        Some(path) => NormalizerConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => NormalizerConfig::default(),
    };

    if !cli.no_detect {
        return Ok(config);
    }

    Ok(NormalizerConfigBuilder::from(config).detect_languages(false).build()?)
}

fn check_size(len: usize) -> Result<()> {
    if len > MAX_HTML_SIZE {
        bail!("input too large: {len} bytes (limit {MAX_HTML_SIZE})");
    }
    Ok(())
}

async fn read_input(input: Option<&PathBuf>) -> Result<String> {
    let bytes = match input {
        Some(path) => {
            let meta = tokio::fs::metadata(path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            check_size(usize::try_from(meta.len()).unwrap_or(usize::MAX))?;
            tokio::fs::read(path)
                .await
                .with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .take(MAX_HTML_SIZE as u64 + 1)
                .read_to_end(&mut buf)
                .await
                .context("reading stdin")?;
            buf
        }
    };
    check_size(bytes.len())?;
    String::from_utf8(bytes).context("input is not valid UTF-8")
}

async fn write_output(output: Option<&PathBuf>, contents: &str) -> Result<()> {
    match output {
        Some(path) => tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("writing {}", path.display())),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(contents.as_bytes()).await.context("writing stdout")?;
            stdout.flush().await.context("flushing stdout")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let normalizer = BlogHtmlNormalizer::new(load_config(&cli)?);
    let html = read_input(cli.input.as_ref()).await?;

    let outcome = normalizer.normalize_with_outcome(&html);
    tracing::info!(
        strategy = ?outcome.strategy,
        blocks = outcome.blocks.len(),
        "Normalized input"
    );

    let rendered = if cli.report {
        let mut json = serde_json::to_string_pretty(&outcome).context("serializing report")?;
        json.push('\n');
        json
    } else {
        outcome.html
    };

    write_output(cli.output.as_ref(), &rendered).await
}
