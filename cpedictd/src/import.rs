use cpedict_common::{config::Database, db};
use cpedict_module_ingestor::{graph::Graph, service::IngestorService};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    /// The CPE dictionary document to import
    pub(crate) file: PathBuf,

    /// Don't apply pending migrations before importing
    #[arg(long, env = "CPEDICT_SKIP_MIGRATIONS")]
    pub(crate) skip_migrations: bool,
}

impl Run {
    pub async fn run(self, database: &Database) -> anyhow::Result<ExitCode> {
        let db = db::Database::new(database).await?;
        if !self.skip_migrations {
            db.migrate().await?;
        }

        let graph = Graph::new(db);
        let ingestor = IngestorService::new(graph.clone());

        log::info!("importing {}", self.file.display());
        let result = ingestor.ingest_file(&self.file).await;
        graph.close().await?;

        println!("{}", serde_json::to_string_pretty(&result?)?);

        Ok(ExitCode::SUCCESS)
    }
}
