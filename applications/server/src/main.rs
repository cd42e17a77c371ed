/// Verse server - playback queue and trending ranking daemon
use clap::{Parser, Subcommand};
use std::time::Duration;
use verse_core::types::{ListenerId, SourceType};
use verse_server::{config::ServerConfig, state::AppState};
use verse_trending::TrendingScheduler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "verse-server")]
#[command(about = "Verse playback backend daemon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the daemon: periodic trending recomputation over a demo library
    Serve,
    /// Run a single trending recomputation and exit
    RecomputeTrending,
    /// Walk a short scripted queue session and print each step
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve(&config).await?,
        Commands::RecomputeTrending => recompute_trending(&config).await?,
        Commands::Demo => demo(&config).await?,
    }

    Ok(())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Verse server");
    tracing::info!(
        interval_secs = config.trending.interval_secs,
        window_days = config.trending.window_days,
        "Trending schedule"
    );

    let state = AppState::new(config);
    state.seed_demo().await?;
    tracing::info!("Demo library seeded");

    let scheduler = TrendingScheduler::new(
        state.engine.clone(),
        Duration::from_secs(config.trending.interval_secs),
    );
    let handle = scheduler.start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    handle.abort();
    Ok(())
}

async fn recompute_trending(config: &ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(config);
    state.seed_demo().await?;

    let published = state.engine.recompute().await?;
    let ranking = verse_core::traits::TrendingStore::current(&*state.library).await?;
    tracing::info!(published, "Trending ranking recomputed");
    for (rank, track) in ranking.iter().enumerate() {
        println!("{:>3}. {}", rank + 1, track);
    }
    Ok(())
}

async fn demo(config: &ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(config);
    state.seed_demo().await?;

    let listener = ListenerId::new("alice");
    let controller = &state.controller;

    let queue = controller
        .clone_to_queue(&listener, SourceType::Album, "album-1")
        .await?;
    println!("cloned album-1: {} tracks", queue.len());

    let outcome = controller.next(&listener).await?;
    println!("next -> position {} ({:?})", outcome.queue.position, outcome.status);

    let queue = controller.toggle_loop_mode(&listener).await?;
    println!("loop mode -> {}", queue.loop_mode);

    let queue = controller.toggle_shuffle(&listener).await?;
    println!(
        "shuffle on -> order {:?}",
        queue
            .ordered_tracks
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
    );

    let queue = controller.toggle_shuffle(&listener).await?;
    println!(
        "shuffle off -> order {:?}",
        queue
            .ordered_tracks
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
    );

    let outcome = controller.previous(&listener).await?;
    println!(
        "previous -> position {} ({:?})",
        outcome.queue.position, outcome.status
    );

    Ok(())
}
