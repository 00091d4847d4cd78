mod artifacts;
mod config;
mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use socialscrape_block::{
    BlockOutput, EnvHost, HostError, OutputValue, SocialMediaScraperBlock, input_json_schema,
    output_json_schema,
};
use socialscrape_generate::GeneratorOptions;
use thiserror::Error;
use uuid::Uuid;

use artifacts::{preview, write_run_artifacts};
use config::{ConfigError, Settings, load_settings};
use logging::init_logging;

const PREVIEW_CHARS: usize = 150;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("host error: {0}")]
    Host(#[from] HostError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("block reported an error: {0}")]
    BlockFailed(String),
}

#[derive(Parser, Debug)]
#[command(name = "socialscrape", version, about = "Social media scraper block runner")]
struct Cli {
    /// Path to socialscrape.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the block locally against the mock client.
    Run(RunArgs),
    /// Print the block's JSON Schema.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Social media URLs to visit.
    #[arg(value_name = "URL")]
    urls: Vec<String>,
    /// Maximum number of posts per URL (1-100).
    #[arg(long)]
    max_posts: Option<u32>,
    /// Skip comment extraction.
    #[arg(long, default_value_t = false)]
    no_comments: bool,
    /// Platform(s) to target. Advisory only.
    #[arg(long = "platform", value_name = "PLATFORM")]
    platforms: Vec<String>,
    /// Seed for reproducible ids and timestamps.
    #[arg(long)]
    seed: Option<u64>,
    /// Directory for run artifacts (CSV tables and output.json).
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Print the outputs as JSON instead of previews.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Fail instead of using the mock key when SOCIAL_SCRAPER_API_KEY is unset.
    #[arg(long, default_value_t = false)]
    require_key: bool,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Print the output schema instead of the input schema.
    #[arg(long, default_value_t = false)]
    output: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Run(args) => run_block(args, settings).await,
        Command::Schema(args) => print_schema(args),
    }
}

async fn run_block(args: RunArgs, settings: Settings) -> Result<(), CliError> {
    init_logging(&settings.logging.level, settings.logging.json_path.as_deref())?;

    let RunArgs {
        urls,
        max_posts,
        no_comments,
        platforms,
        seed,
        out_dir,
        json: as_json,
        require_key,
    } = args;

    let scrape = settings.scrape;
    let block = SocialMediaScraperBlock::new(GeneratorOptions {
        seed: seed.or(scrape.seed),
        ..GeneratorOptions::default()
    });
    let provider = block.provider();

    let platforms = if platforms.is_empty() {
        scrape.platforms
    } else {
        platforms
    };
    let mut raw_input = json!({
        "credentials": provider.credentials_meta("local"),
        "target_urls": urls,
        "max_posts": max_posts.unwrap_or(scrape.max_posts),
        "include_comments": scrape.include_comments && !no_comments,
    });
    if !platforms.is_empty() {
        raw_input["platforms"] = json!(platforms);
    }

    let run_id = Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now();
    let timer = Instant::now();
    tracing::info!(event = "run_started", run_id = %run_id);

    let host = EnvHost::new().with_test_key_fallback(!require_key);
    let output = block.invoke(&host, &raw_input).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&output.to_json())?);
    } else {
        print_outputs(&output);
    }

    if let Some(message) = output.error_message() {
        tracing::info!(event = "run_finished", status = "error", run_id = %run_id);
        return Err(CliError::BlockFailed(message.to_string()));
    }

    if let (Some(out_dir), Some(scraped)) = (out_dir, output.to_scraper_output()) {
        let artifacts = write_run_artifacts(&out_dir, &run_id, started_at, &scraped)?;
        tracing::info!(event = "artifacts_written", path = %artifacts.run_dir.display());
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        run_id = %run_id,
        cost = host.total_charged(),
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

fn print_outputs(output: &BlockOutput) {
    for (name, value) in output.entries() {
        match value {
            OutputValue::Text(text) if name.ends_with("_csv") => {
                println!("\n[OUTPUT] {name} (preview):");
                println!("{}", preview(text, PREVIEW_CHARS));
            }
            OutputValue::Text(text) => println!("\n[ERROR] {name}: {text}"),
            OutputValue::Count(count) => println!("\n[METADATA] {name}: {count}"),
        }
    }
}

fn print_schema(args: SchemaArgs) -> Result<(), CliError> {
    let schema = if args.output {
        serde_json::to_string_pretty(&output_json_schema())?
    } else {
        serde_json::to_string_pretty(&input_json_schema())?
    };
    println!("{schema}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_args_parse_flags() {
        let cli = Cli::try_parse_from([
            "socialscrape",
            "run",
            "https://twitter.com/example",
            "https://reddit.com/r/example",
            "--max-posts",
            "5",
            "--no-comments",
            "--platform",
            "X",
            "--seed",
            "7",
        ])
        .expect("parse run args");

        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.urls.len(), 2);
        assert_eq!(args.max_posts, Some(5));
        assert!(args.no_comments);
        assert_eq!(args.platforms, ["X"]);
        assert_eq!(args.seed, Some(7));
    }
}
