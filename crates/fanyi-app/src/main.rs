use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fanyi_correct::CorrectClient;
use fanyi_translator::ChatTranslator;
use fanyi_tts::NullSynthesizer;
use tokio::signal;

mod controller;
mod coordinator;
mod events;
mod io;
mod profile;
mod state;
mod ui;


use controller::AppController;
use state::AppState;

#[derive(Parser)]
#[command(name = "fanyi", about = "AI translation front end")]
struct Args {
    /// Config profile to load
    #[arg(long, default_value = "main")]
    profile: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Create a new profile cloned from main, then exit
    #[arg(long)]
    new_profile: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json_logs);

    profile::init_user_config()?;

    if let Some(name) = args.new_profile {
        let path = profile::add_profile_from_default(&name)?;
        tracing::info!("Profile created at {}", path.display());
        return Ok(());
    }

    let config = profile::load_user_profile(&args.profile)?;

    let timeout = Duration::from_secs(config.timeout_seconds);
    let translator = Arc::new(ChatTranslator::new(config.service.clone(), timeout));
    let correct_client = Arc::new(CorrectClient::new(config.service.clone(), timeout));
    // No speech backend in the headless shell; the seam stays wired
    let synthesizer = Arc::new(NullSynthesizer);

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(translator, correct_client, synthesizer);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr)
            .init();
    }
}
