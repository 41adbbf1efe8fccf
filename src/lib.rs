pub mod classify;
pub mod cli;
pub mod clients;
pub mod config;
pub mod domain;
pub mod favorites;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;
pub mod views;

use clap::Parser;
use cli::{Cli, Commands};
pub use config::Config;
use state::AppState;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let cli = Cli::parse();

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    if matches!(command, Commands::Init) {
        return cli::cmd_init();
    }

    config.validate()?;
    let state = AppState::from_config(&config, cli.user.as_deref())?;
    debug!(favorites_key = state.favorites.key(), "Application state ready");

    match command {
        Commands::Top => cli::cmd_top_movies(&state).await,
        Commands::Info { id } => cli::cmd_movie_info(&state, &id).await,
        Commands::Favorites => cli::cmd_favorites(&state).await,
        Commands::Fav { id } => cli::cmd_toggle_favorite(&state, &id),
        Commands::Init => cli::cmd_init(),
    }
}

fn print_help() {
    println!("movieapp - Movie catalog viewer");
    println!();
    println!("Usage: movieapp [--user <email>] <command>");
    println!();
    println!("Commands:");
    println!("  top              Show the top movies");
    println!("  info <id>        Show details about a movie");
    println!("  favorites        Show favorite movies");
    println!("  fav <id>         Add or remove a favorite");
    println!("  init             Create default config file");
}
