use clap::Parser;
use std::path::PathBuf;
use thronglets::config::GameConfig;
use thronglets::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a RON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a tile sprite sheet PNG (overrides the config file)
    #[arg(long)]
    tileset: Option<PathBuf>,

    /// Seed for the spawn RNG (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = GameConfig::load(args.config.as_deref())?;
    if args.tileset.is_some() {
        config.tileset = args.tileset;
    }

    log::info!("Starting Thronglets");
    pollster::block_on(run(config, args.seed))
}

async fn run(config: GameConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(&config, seed).await?;
    App::run(event_loop, app)
}
