use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smart_games::{
    args::Args,
    config::Settings,
    session::GameKind,
    stats::StatsStore,
    ui::run_ui,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a daily file.
    std::fs::create_dir_all(&args.log_dir).context("Failed to create log directory")?;
    let appender = tracing_appender::rolling::daily(&args.log_dir, "smart-games.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let settings = Settings::from_args(&args)?;
    tracing::info!(
        stats = %settings.stats_path.display(),
        best_of = settings.best_of.get(),
        level = %settings.level,
        round_limit = ?settings.round_limit,
        "starting"
    );

    let stats = StatsStore::load(&settings.stats_path);

    if args.summary {
        for kind in GameKind::ALL {
            println!("[{}]\n{}\n", kind.title(), stats.record().summary(kind));
        }
        return Ok(());
    }

    run_ui(&settings, stats)
}
