use clap::{Parser, Subcommand};
use pizza_backend::{
    config::AppConfig,
    database::{migrations, pool::create_pool},
    logging::LogSettings,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "migrate", about = "Apply or revert database schema revisions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply every pending revision.
    Up,
    /// Revert revisions newer than TARGET (default: the revision before head).
    Down { target: Option<i64> },
    /// List known revisions and whether each is applied.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    LogSettings::from_config(&config).install()?;

    let pool = create_pool(&config).await?;

    match cli.command {
        Command::Up => {
            migrations::upgrade(&pool).await?;
            info!(head = ?migrations::head_revision(), "Database is up to date");
        }
        Command::Down { target } => {
            let target = target
                .or_else(|| migrations::head_revision().and_then(migrations::predecessor))
                .unwrap_or(0);
            migrations::downgrade(&pool, target).await?;
            info!(target, "Downgrade finished");
        }
        Command::Status => {
            let applied = migrations::applied_revisions(&pool).await?;
            for revision in migrations::revisions() {
                let state = if applied.contains(&revision) {
                    "applied"
                } else {
                    "pending"
                };
                println!(
                    "{} {:<8} {}",
                    revision,
                    state,
                    migrations::description(revision).unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}
