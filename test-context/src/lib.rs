#![allow(clippy::expect_used)]

use cpedict_common as common;
use cpedict_module_ingestor::graph::Graph;
use cpedict_module_ingestor::model::IngestResult;
use cpedict_module_ingestor::service::IngestorService;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tracing::instrument;

#[allow(dead_code)]
pub struct CpedictContext {
    pub db: common::db::Database,
    pub graph: Graph,
    pub ingestor: IngestorService,
    /// Holds the SQLite database file, if one is used
    dir: Option<TempDir>,
}

impl CpedictContext {
    fn new(db: common::db::Database, dir: Option<TempDir>) -> Self {
        let graph = Graph::new(db.clone());
        let ingestor = IngestorService::new(graph.clone());

        Self {
            db,
            graph,
            ingestor,
            dir,
        }
    }

    /// Import a document from the test data directory.
    pub async fn ingest_document(&self, path: &str) -> Result<IngestResult, anyhow::Error> {
        Ok(self.ingestor.ingest_file(absolute(path)).await?)
    }

    /// Import a document from a string.
    pub async fn ingest_xml(&self, xml: &str) -> Result<IngestResult, anyhow::Error> {
        Ok(self.ingestor.ingest(xml.as_bytes()).await?)
    }
}

impl AsyncTestContext for CpedictContext {
    #[instrument]
    async fn setup() -> CpedictContext {
        if env::var("EXTERNAL_TEST_DB").is_ok() {
            log::warn!("Using external database from 'DB_*' env vars");
            let config = common::config::Database::from_env().expect("DB config from env");

            let db = common::db::Database::new(&config)
                .await
                .expect("Configuring the database");
            db.refresh().await.expect("Resetting the database");

            return CpedictContext::new(db, None);
        }

        let dir = tempfile::tempdir().expect("Create a temporary directory");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("cpedict.db").display()
        );

        let config = common::config::Database {
            max_conn: 1,
            min_conn: 1,
            ..common::config::Database::with_url(url).expect("DB config")
        };

        let db = common::db::Database::new(&config)
            .await
            .expect("Create a SQLite database");
        db.migrate().await.expect("Apply the migrations");

        CpedictContext::new(db, Some(dir))
    }

    async fn teardown(self) {
        if let Err(err) = self.db.close().await {
            log::warn!("Failed to close the database: {err}");
        }
    }
}

/// The path of a document in the test data directory.
pub fn absolute(path: &str) -> PathBuf {
    let workspace_root: PathBuf = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    workspace_root.join("etc/test-data").join(path)
}

/// Load a test document.
pub async fn document_bytes(path: &str) -> Result<Vec<u8>, anyhow::Error> {
    Ok(tokio::fs::read(absolute(path)).await?)
}
