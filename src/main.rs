use anyhow::Context;
use clap::Parser;
use pastesum::config::Config;
use pastesum::logging::init_tracing;
use pastesum::prompt::SummaryLength;
use pastesum::summarizer::SummarizerClient;
use pastesum::ui::app::AppSettings;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pastesum", version, about = "Paste text into the terminal and get an LLM-written summary")]
struct Cli {
    /// Config file path (default: ~/.config/pastesum/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the model from config
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Preselected summary length
    #[arg(long, value_enum)]
    length: Option<SummaryLength>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        tracing::error!(error = %format!("{:#}", err), "Fatal error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(model) = cli.model {
        config.api.model = Some(model);
    }
    if let Some(base_url) = cli.base_url {
        config.api.base_url = Some(base_url);
    }
    if let Some(length) = cli.length {
        config.ui.default_length = length;
    }
    config.validate()?;

    let credential = config.api.resolve_credential();
    let configured = credential.is_configured();
    if !configured {
        tracing::warn!(
            env_var = %config.api.api_key_env(),
            "No API key configured; summarization requests will fail"
        );
    }

    let client = SummarizerClient::new(&config.api, credential)
        .context("Failed to build HTTP client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    tracing::info!(
        provider = ?config.api.provider,
        model = %config.api.model(),
        base_url = %config.api.base_url(),
        "Starting pastesum"
    );

    let settings = AppSettings::from_config(&config, configured);
    pastesum::ui::run(
        settings,
        Duration::from_millis(config.ui.tick_rate_ms),
        Arc::new(client),
        runtime.handle().clone(),
    )
    .context("Terminal UI failed")?;

    runtime.shutdown_background();
    Ok(())
}
