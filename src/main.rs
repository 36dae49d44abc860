use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use listing_scout::backend::FastApiBackend;
use listing_scout::config::AppConfig;
use listing_scout::extractor::{LabelSet, ListingExtractor};
use listing_scout::render::render_text;
use listing_scout::telemetry;
use listing_scout::Assistant;
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "listing-scout",
    about = "Turn apartment-search assistant replies into structured listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract listings from a saved assistant reply (stdin when no file is given)
    Extract(ExtractArgs),
    /// Send one message to the chat backend and show the reply
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// File holding the assistant reply
    #[arg(long)]
    file: Option<PathBuf>,
    /// Label vocabulary: fr, en or any
    #[arg(long)]
    labels: Option<String>,
    /// Print the extraction as JSON instead of rendered cards
    #[arg(long)]
    json: bool,
    /// Include the list of dropped entries in JSON output
    #[arg(long)]
    report: bool,
}

#[derive(Args, Debug)]
struct ChatArgs {
    /// Message to send
    #[arg(long)]
    message: String,
    /// Session identifier forwarded to the backend
    #[arg(long)]
    session_id: Option<String>,
    /// Print the reply and extraction as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    telemetry::init(&config.log_level)?;

    match cli.command {
        Command::Extract(args) => run_extract(&config, args),
        Command::Chat(args) => run_chat(&config, args).await,
    }
}

fn run_extract(config: &AppConfig, args: ExtractArgs) -> Result<()> {
    let labels = match args.labels.as_deref() {
        Some(name) => LabelSet::from_name(name).with_context(|| {
            format!("Unknown label vocabulary '{name}' (expected fr, en or any)")
        })?,
        None => config.labels,
    };

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };
    debug!("Read {} bytes of assistant text", text.len());

    let extractor = ListingExtractor::with_labels(labels.labels());
    let (result, report) = extractor.extract_with_report(&text);

    if report.all_dropped() {
        warn!(
            "Found {} numbered entries but none had every required field",
            report.headings
        );
    }
    info!("✅ Extracted {} listings", result.listings.len());

    if args.json {
        let output = if args.report {
            json!({ "result": result, "report": report })
        } else {
            serde_json::to_value(&result)?
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_text(&text, &result));
    }

    Ok(())
}

async fn run_chat(config: &AppConfig, args: ChatArgs) -> Result<()> {
    info!("🏠 Sending message to {}", config.backend.url);

    let backend = FastApiBackend::new(&config.backend)?;
    let extractor = ListingExtractor::with_labels(config.labels.labels());
    let mut assistant = Assistant::new(backend, extractor);
    if let Some(session_id) = args.session_id {
        assistant = assistant.with_session(session_id);
    }

    let turn = assistant.ask(&args.message).await?;

    if args.json {
        let output = json!({
            "reply": turn.reply,
            "extraction": turn.extraction,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_text(&turn.reply.text, &turn.extraction));
    }

    Ok(())
}
