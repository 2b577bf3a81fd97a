use crate::graph::{error::Error, Graph};
use cpedict_entity as entity;
use entity::{deprecated_by, deprecation, deprecation_type::DeprecationType};
use sea_orm::{ActiveModelTrait, ConnectionTrait, ModelTrait, QueryOrder, Set};
use std::fmt::Debug;

#[derive(Clone)]
pub struct DeprecationContext<'g> {
    pub graph: &'g Graph,
    pub deprecation: deprecation::Model,
}

impl<'g> DeprecationContext<'g> {
    pub fn new(graph: &'g Graph, deprecation: deprecation::Model) -> Self {
        Self { graph, deprecation }
    }

    pub async fn ingest_deprecated_by<C: ConnectionTrait>(
        &self,
        name_id: i32,
        deprecation_type: DeprecationType,
        connection: &C,
    ) -> Result<deprecated_by::Model, Error> {
        let model = deprecated_by::ActiveModel {
            id: Default::default(),
            deprecation_id: Set(self.deprecation.id),
            name_id: Set(name_id),
            deprecation_type: Set(deprecation_type),
        };

        Ok(model.insert(connection).await?)
    }

    pub async fn deprecated_by<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<deprecated_by::Model>, Error> {
        Ok(self
            .deprecation
            .find_related(deprecated_by::Entity)
            .order_by_asc(deprecated_by::Column::Id)
            .all(connection)
            .await?)
    }
}

impl Debug for DeprecationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.deprecation.fmt(f)
    }
}
