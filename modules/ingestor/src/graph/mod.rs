pub mod cpe_item;
pub mod cpe_list;
pub mod cpe_name;
pub mod deprecation;
pub mod error;
pub mod generator;
pub mod organization;
pub mod provenance;

use cpedict_common::db::Database;

/// The entity store of the dictionary.
///
/// Operations take the connection to use, which allows running them inside a transaction.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) db: Database,
}

impl Graph {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn close(self) -> anyhow::Result<()> {
        self.db.close().await
    }

    /// Ping the database.
    ///
    /// Intended to be used for health checks.
    pub async fn ping(&self) -> anyhow::Result<()> {
        self.db.ping().await
    }
}
