use cpedict_common::{config::Database, db};
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Apply all pending migrations
    Migrate,
    /// Drop all tables and apply all migrations again
    Refresh,
}

impl Run {
    pub async fn run(self, database: &Database) -> anyhow::Result<ExitCode> {
        let db = db::Database::new(database).await?;

        match self.command {
            Command::Migrate => db.migrate().await?,
            Command::Refresh => db.refresh().await?,
        }

        db.close().await?;

        Ok(ExitCode::SUCCESS)
    }
}
