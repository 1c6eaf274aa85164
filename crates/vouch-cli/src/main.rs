use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use vouch_core::{
    Analyzer, GEMINI, GeminiAnalyzer, Session, SessionState, format_report_text,
    load_audio_payload, save_report,
};

mod render;

#[derive(Parser)]
#[command(name = "vouch")]
#[command(
    about = "Transcribe, translate, and sentiment-analyze a dealer testimonial audio file"
)]
struct Cli {
    /// Path to the testimonial audio file (mp3, wav, m4a, ...)
    audio: PathBuf,

    /// Write the plain-text report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the structured report as pretty-printed JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate API key early
    let analyzer = match GeminiAnalyzer::new(GEMINI) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{}  {}\n",
        style("vouch").cyan().bold(),
        style("Testimonial Analyzer").dim()
    );

    // Step 1: Load and encode the audio
    let payload = match load_audio_payload(&cli.audio).await {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    let file_name = cli
        .audio
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.audio.display().to_string());
    println!(
        "{} Loaded: {} {}",
        style("✓").green().bold(),
        style(&file_name).dim(),
        style(format!("({})", payload.mime_type)).dim()
    );

    // Step 2: One analysis call, session-guarded so input stays locked
    // until the request resolves
    let mut session = Session::new();
    let token = session.begin()?;
    let spinner = create_spinner("Analyzing testimonial with Gemini...");
    let outcome = analyzer.analyze(&payload).await;
    session.finish(token, outcome);

    match session.state() {
        SessionState::Report(report) => {
            spinner.finish_with_message(format!(
                "{} Analysis complete",
                style("✓").green().bold()
            ));
            println!();
            render::render_report(report);

            if let Some(path) = &cli.output {
                fs::write(path, format_report_text(report)).await?;
                println!("\n{} {}", style("Saved:").dim(), style(path.display()).cyan());
            }
            if let Some(path) = &cli.json {
                save_report(report, path).await?;
                println!("{} {}", style("Saved:").dim(), style(path.display()).cyan());
            }
        }
        SessionState::Failed(message) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), message);
            std::process::exit(1);
        }
        SessionState::Idle | SessionState::Processing => {
            unreachable!("the analysis outcome was just applied")
        }
    }

    Ok(())
}
