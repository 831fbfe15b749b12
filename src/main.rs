use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Roadwatch: pothole report triage for social media posts.
///
/// Reads scraped posts from a JSON file, asks Gemini which ones report a
/// pothole or road damage, and prints a summary with extracted locations.
#[derive(Parser)]
#[command(name = "roadwatch", version, about)]
struct Cli {
    /// Path to the JSON file of scraped posts
    #[arg(long, default_value = "recent_posts.json")]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roadwatch=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = roadwatch::config::Config::load()?;
    config.require_gemini()?;

    let records = roadwatch::posts::load_posts_from_file(&cli.file);
    if records.is_empty() {
        println!("No posts loaded. Exiting.");
        return Ok(());
    }

    info!(count = records.len(), file = %cli.file.display(), "Posts loaded");
    println!("Analyzing {} posts...", records.len());

    let classifier = roadwatch::classifier::gemini::GeminiClassifier::new(
        config.gemini_api_key.clone(),
        config.api_url.clone(),
        config.model.clone(),
    );

    let reports = roadwatch::pipeline::run(&classifier, &records).await;

    roadwatch::output::terminal::display_report_summary(&reports);

    Ok(())
}
