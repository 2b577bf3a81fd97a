use crate::graph::{cpe_list::CpeListContext, error::Error};
use cpedict_entity::generator;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use time::OffsetDateTime;
use tracing::instrument;

/// The producer of a dictionary document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorInformation {
    pub product_name: String,
    pub product_version: String,
    pub schema_version: String,
    pub timestamp: OffsetDateTime,
}

impl CpeListContext<'_> {
    #[instrument(skip(self, connection), err)]
    pub async fn ingest_generator<C: ConnectionTrait>(
        &self,
        information: GeneratorInformation,
        connection: &C,
    ) -> Result<generator::Model, Error> {
        let GeneratorInformation {
            product_name,
            product_version,
            schema_version,
            timestamp,
        } = information;

        let model = generator::ActiveModel {
            id: Default::default(),
            cpe_list_id: Set(self.cpe_list.id),
            product_name: Set(product_name),
            product_version: Set(product_version),
            schema_version: Set(schema_version),
            timestamp: Set(timestamp),
        };

        Ok(model.insert(connection).await?)
    }
}
