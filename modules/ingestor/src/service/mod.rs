pub mod dictionary;

use crate::{graph::Graph, model::IngestResult};
use cpedict_common::{cpe::CpeNameError, error::ErrorInformation};
use cpedict_entity::code::UnknownCode;
use dictionary::DictionaryParser;
use sea_orm::{error::DbErr, TransactionTrait};
use std::time::Instant;
use tokio::io::AsyncBufRead;
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    #[error("invalid CPE name in <{element}>: {name}")]
    InvalidCpeName {
        element: &'static str,
        name: String,
        #[source]
        source: CpeNameError,
    },
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),
    #[error("<{element}> is missing the required '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("invalid {field} in <{element}>: '{value}'")]
    InvalidValue {
        element: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("more than one <cpe23-item> in the item of {name}")]
    DuplicateCpe23Item { name: String },
    #[error("more than one <provenance-record> in the item of {name}")]
    DuplicateProvenanceRecord { name: String },
    #[error("missing enclosing <{0}>")]
    MissingElement(&'static str),
    #[error(transparent)]
    Graph(#[from] crate::graph::error::Error),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl Error {
    /// Whether the error is caused by the document, rather than the store.
    pub fn is_document_error(&self) -> bool {
        !matches!(self, Self::Graph(_) | Self::Db(_))
    }

    /// The machine-readable name of the error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "I/O",
            Self::Utf8(_) => "UTF-8",
            Self::Xml(_) => "XmlParse",
            Self::InvalidCpeName { .. } => "InvalidCpeName",
            Self::UnknownCode(_) => "UnknownCode",
            Self::MissingAttribute { .. } => "MissingAttribute",
            Self::InvalidValue { .. } => "InvalidValue",
            Self::DuplicateCpe23Item { .. } => "DuplicateCpe23Item",
            Self::DuplicateProvenanceRecord { .. } => "DuplicateProvenanceRecord",
            Self::MissingElement(_) => "MissingElement",
            Self::Graph(_) => "Graph",
            Self::Db(_) => "Database",
        }
    }
}

impl From<&Error> for ErrorInformation {
    fn from(err: &Error) -> Self {
        ErrorInformation::new(err.kind(), err).with_causes(err)
    }
}

/// Imports CPE dictionaries into the store.
#[derive(Clone)]
pub struct IngestorService {
    graph: Graph,
}

impl IngestorService {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Import a dictionary document.
    ///
    /// All rows of the document are written in a single transaction. On error, nothing of the
    /// document remains in the store.
    #[instrument(skip(self, reader), err)]
    pub async fn ingest<R>(&self, reader: R) -> Result<IngestResult, Error>
    where
        R: AsyncBufRead + Unpin,
    {
        let start = Instant::now();

        let tx = self.graph.db.begin().await?;
        let report = DictionaryParser::new(&self.graph)
            .parse(reader, &tx)
            .await?;
        tx.commit().await?;

        let duration = start.elapsed();
        log::info!(
            "imported {} items into '{}' in {}, {} elements skipped",
            report.items,
            report.cpe_list.name,
            humantime::Duration::from(duration),
            report.warnings.len(),
        );

        Ok(IngestResult {
            id: report.cpe_list.id,
            name: report.cpe_list.name,
            items: report.items,
            warnings: report.warnings,
        })
    }

    /// Import a dictionary document from a file.
    pub async fn ingest_file(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<IngestResult, Error> {
        let file = tokio::fs::File::open(path).await?;
        self.ingest(tokio::io::BufReader::new(file)).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn error_information_carries_the_cause() {
        let err = Error::InvalidCpeName {
            element: "cpe-item",
            name: "cpe:/x".into(),
            source: CpeNameError::Binding("cpe:/x".into()),
        };

        let info = ErrorInformation::from(&err);
        assert_eq!(info.error, "InvalidCpeName");
        assert_eq!(info.message, "invalid CPE name in <cpe-item>: cpe:/x");
        assert!(info.details.is_some());
        assert!(err.is_document_error());
    }

    #[test]
    fn store_errors_are_not_document_errors() {
        let err = Error::Db(DbErr::Custom("gone".into()));
        assert!(!err.is_document_error());
        assert_eq!(ErrorInformation::from(&err).error, "Database");
    }
}
