//! Labsimplify CLI - get a plain-language summary of a lab report
//!
//! ```bash
//! labsimplify simplify report.pdf                 # Upload and print the summary
//! labsimplify simplify scan.png --json            # Print the final state as JSON
//! labsimplify simplify report.pdf -o summary.txt  # Also save the summary
//! labsimplify types                               # Accepted file types
//! ```
//!
//! The endpoint defaults to `http://localhost:8000/api/simplify` and can be
//! changed with `LABSIMPLIFY_API_URL` (also read from `.env`) or `--api-url`.

use clap::{Parser, Subcommand};
use labsimplify::presenter::drop_prompt;
use labsimplify::{
    media_type_for_path, perform, present, render_plain, submit_control, ClientConfig,
    FileCandidate, HttpTransport, UploadFlow, UploadState, View, ALLOWED_MEDIA_TYPES,
    PICKER_ACCEPT,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "labsimplify")]
#[command(about = "Upload a lab report and get an easy-to-understand summary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a lab report (PDF or image) and print the summary
    Simplify {
        /// Report file
        input: PathBuf,

        /// Summarizing endpoint (overrides LABSIMPLIFY_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// Print the final upload state as JSON
        #[arg(long)]
        json: bool,

        /// Also write the summary to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show accepted file types
    Types,
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simplify {
            input,
            api_url,
            json,
            output,
        } => cmd_simplify(&input, api_url.as_deref(), json, output.as_deref()).await,

        Commands::Types => cmd_types(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Log records go to stderr, filtered by `RUST_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn cmd_simplify(
    input: &Path,
    api_url: Option<&str>,
    json: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    // The flag replaces the environment outright, so a bad env value is ignored.
    let config = match api_url {
        Some(url) => ClientConfig::default().with_api_url(url)?,
        None => ClientConfig::from_env()?,
    };

    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| format!("Not a file: {}", input.display()))?;
    let bytes = tokio::fs::read(input).await?;
    let candidate = FileCandidate::new(name, media_type_for_path(input), bytes);

    let mut flow = UploadFlow::new();
    if let Err(rejected) = flow.pick_file(candidate) {
        return Err(format!("{} (accepted: {})", rejected, ALLOWED_MEDIA_TYPES.join(", ")).into());
    }

    let ticket = flow.begin().ok_or("Nothing to submit")?;
    let control = submit_control(flow.state(), true);
    eprintln!("📄 {}", drop_prompt(Some(ticket.file().name())));
    eprintln!("⏳ {}", control.label);
    eprintln!("   POST {}", config.api_url);

    let transport = HttpTransport::from_config(&config);
    let outcome = perform(&transport, ticket.file()).await;
    flow.finish(ticket.attempt(), outcome);

    let state = flow.state();
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        let view = present(state);
        let text = render_plain(&view, state.file_name());
        match view {
            View::Error { .. } => eprint!("\n{}", text),
            _ => print!("\n{}", text),
        }
    }

    match state {
        UploadState::Success { summary, .. } => {
            if let Some(path) = output {
                fs::write(path, summary)?;
                eprintln!("💾 Summary written to: {}", path.display());
            }
            Ok(())
        }
        UploadState::Error { message, .. } => Err(format!("Upload failed: {}", message).into()),
        other => Err(format!("Upload did not finish (status: {})", other.status()).into()),
    }
}

fn cmd_types() -> Result<(), Box<dyn std::error::Error>> {
    println!("Accepted media types:");
    for media_type in ALLOWED_MEDIA_TYPES {
        println!("  {}", media_type);
    }
    println!("Picker filter: {}", PICKER_ACCEPT);
    Ok(())
}
