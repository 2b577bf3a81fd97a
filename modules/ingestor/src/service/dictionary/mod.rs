//! Streaming import of CPE dictionary documents.

mod fragment;
mod handler;
mod state;

pub use handler::ImportReport;

use crate::{graph::Graph, service::Error};
use handler::DictionaryHandler;
use quick_xml::{events::Event, Reader};
use sea_orm::ConnectionTrait;
use tokio::io::AsyncBufRead;
use tracing::instrument;

/// Drives a [`DictionaryHandler`] with the events of a document.
///
/// The document is read as a stream, only the currently open elements are kept in memory.
pub struct DictionaryParser<'g> {
    graph: &'g Graph,
}

impl<'g> DictionaryParser<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Parse a document, writing its content using the provided connection.
    ///
    /// This does not start a transaction. On error, the rows written so far remain, unless the
    /// connection is a transaction which gets rolled back.
    #[instrument(skip_all, err)]
    pub async fn parse<R, C>(&self, reader: R, connection: &C) -> Result<ImportReport, Error>
    where
        R: AsyncBufRead + Unpin,
        C: ConnectionTrait,
    {
        let mut reader = Reader::from_reader(reader);
        let mut handler = DictionaryHandler::new(self.graph, connection);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into_async(&mut buf).await? {
                Event::Start(e) => handler.start(&e).await?,
                Event::Empty(e) => {
                    handler.start(&e).await?;
                    handler.end().await?;
                }
                Event::End(_) => handler.end().await?,
                Event::Text(e) => handler.text(&e.unescape()?),
                Event::CData(e) => handler.text(std::str::from_utf8(&e)?),
                Event::Eof => break,
                _ => {}
            }

            buf.clear();
        }

        handler.finish()
    }
}
