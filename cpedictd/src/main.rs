mod db;
mod import;
mod log;

use clap::Parser;
use cpedict_common::config::Database;
use std::process::{ExitCode, Termination};

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Import a CPE dictionary document
    Import(import::Run),
    /// Manage the database schema
    #[command(flatten)]
    Db(db::Command),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "cpedictd",
    long_about = None
)]
pub struct Cpedictd {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub database: Database,
}

impl Cpedictd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                ::log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        ::log::error!("Caused by:");
                    }
                    ::log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        log::init_log()?;

        match self.command {
            Command::Import(run) => run.run(&self.database).await,
            Command::Db(command) => db::Run { command }.run(&self.database).await,
        }
    }
}

#[tokio::main]
async fn main() -> impl Termination {
    Cpedictd::parse().run().await
}
