use crate::graph::{
    cpe_list::CpeListContext, cpe_name::CpeNameContext, deprecation::DeprecationContext,
    error::Error, provenance::ProvenanceRecordContext, Graph,
};
use cpedict_common::cpe::Wfn;
use cpedict_entity as entity;
use entity::cpe_item;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use std::fmt::Debug;
use time::OffsetDateTime;
use tracing::instrument;

/// The attributes of a dictionary item, with its names already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpeItemInformation {
    pub name_id: i32,
    pub deprecated: bool,
    pub deprecated_by_id: Option<i32>,
    pub deprecation_date: Option<OffsetDateTime>,
}

impl<'g> CpeListContext<'g> {
    #[instrument(skip(self, connection), err)]
    pub async fn ingest_cpe_item<C: ConnectionTrait>(
        &self,
        information: CpeItemInformation,
        connection: &C,
    ) -> Result<CpeItemContext<'g>, Error> {
        let model = cpe_item::ActiveModel {
            id: Default::default(),
            name_id: Set(information.name_id),
            deprecated: Set(information.deprecated),
            deprecated_by_id: Set(information.deprecated_by_id),
            deprecation_date: Set(information.deprecation_date),
            cpe_list_id: Set(self.cpe_list.id),
        };

        Ok(CpeItemContext::new(self.graph, model.insert(connection).await?))
    }
}

#[derive(Clone)]
pub struct CpeItemContext<'g> {
    pub graph: &'g Graph,
    pub cpe_item: cpe_item::Model,
}

impl<'g> CpeItemContext<'g> {
    pub fn new(graph: &'g Graph, cpe_item: cpe_item::Model) -> Self {
        Self { graph, cpe_item }
    }

    /// The name of the item, reconstructed from the stored tuple.
    pub async fn name<C: ConnectionTrait>(&self, connection: &C) -> Result<Wfn, Error> {
        self.get_name(connection).await?.wfn()
    }

    pub async fn get_name<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<CpeNameContext<'g>, Error> {
        self.graph
            .get_cpe_name_by_id(self.cpe_item.name_id, connection)
            .await?
            .ok_or_else(|| Error::CpeNameNotFound(self.cpe_item.name_id.to_string()))
    }

    pub async fn get_deprecated_by<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Option<CpeNameContext<'g>>, Error> {
        match self.cpe_item.deprecated_by_id {
            Some(id) => self.graph.get_cpe_name_by_id(id, connection).await,
            None => Ok(None),
        }
    }

    pub async fn ingest_title<C: ConnectionTrait>(
        &self,
        language: String,
        value: String,
        connection: &C,
    ) -> Result<entity::title::Model, Error> {
        let model = entity::title::ActiveModel {
            id: Default::default(),
            cpe_item_id: Set(self.cpe_item.id),
            language: Set(language),
            value: Set(value),
        };

        Ok(model.insert(connection).await?)
    }

    pub async fn ingest_note<C: ConnectionTrait>(
        &self,
        language: String,
        value: String,
        connection: &C,
    ) -> Result<entity::note::Model, Error> {
        let model = entity::note::ActiveModel {
            id: Default::default(),
            cpe_item_id: Set(self.cpe_item.id),
            language: Set(language),
            value: Set(value),
        };

        Ok(model.insert(connection).await?)
    }

    pub async fn ingest_reference<C: ConnectionTrait>(
        &self,
        href: String,
        name: String,
        connection: &C,
    ) -> Result<entity::reference::Model, Error> {
        let model = entity::reference::ActiveModel {
            id: Default::default(),
            cpe_item_id: Set(self.cpe_item.id),
            href: Set(href),
            name: Set(name),
        };

        Ok(model.insert(connection).await?)
    }

    pub async fn ingest_check<C: ConnectionTrait>(
        &self,
        system: String,
        href: Option<String>,
        value: String,
        connection: &C,
    ) -> Result<entity::check::Model, Error> {
        let model = entity::check::ActiveModel {
            id: Default::default(),
            cpe_item_id: Set(self.cpe_item.id),
            system: Set(system),
            href: Set(href),
            value: Set(value),
        };

        Ok(model.insert(connection).await?)
    }

    pub async fn ingest_deprecation<C: ConnectionTrait>(
        &self,
        date: Option<OffsetDateTime>,
        connection: &C,
    ) -> Result<DeprecationContext<'g>, Error> {
        let model = entity::deprecation::ActiveModel {
            id: Default::default(),
            cpe_item_id: Set(self.cpe_item.id),
            date: Set(date),
        };

        Ok(DeprecationContext::new(
            self.graph,
            model.insert(connection).await?,
        ))
    }

    pub async fn ingest_provenance_record<C: ConnectionTrait>(
        &self,
        submitter_id: i32,
        connection: &C,
    ) -> Result<ProvenanceRecordContext<'g>, Error> {
        let model = entity::provenance_record::ActiveModel {
            id: Default::default(),
            cpe_item_id: Set(self.cpe_item.id),
            submitter_id: Set(submitter_id),
        };

        Ok(ProvenanceRecordContext::new(
            self.graph,
            model.insert(connection).await?,
        ))
    }

    pub async fn titles<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<entity::title::Model>, Error> {
        Ok(self
            .cpe_item
            .find_related(entity::title::Entity)
            .order_by_asc(entity::title::Column::Id)
            .all(connection)
            .await?)
    }

    pub async fn notes<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<entity::note::Model>, Error> {
        Ok(self
            .cpe_item
            .find_related(entity::note::Entity)
            .order_by_asc(entity::note::Column::Id)
            .all(connection)
            .await?)
    }

    pub async fn references<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<entity::reference::Model>, Error> {
        Ok(self
            .cpe_item
            .find_related(entity::reference::Entity)
            .order_by_asc(entity::reference::Column::Id)
            .all(connection)
            .await?)
    }

    pub async fn checks<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<entity::check::Model>, Error> {
        Ok(self
            .cpe_item
            .find_related(entity::check::Entity)
            .order_by_asc(entity::check::Column::Id)
            .all(connection)
            .await?)
    }

    pub async fn deprecations<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<DeprecationContext<'g>>, Error> {
        Ok(self
            .cpe_item
            .find_related(entity::deprecation::Entity)
            .order_by_asc(entity::deprecation::Column::Id)
            .all(connection)
            .await?
            .into_iter()
            .map(|deprecation| DeprecationContext::new(self.graph, deprecation))
            .collect())
    }

    pub async fn provenance_record<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Option<ProvenanceRecordContext<'g>>, Error> {
        Ok(entity::provenance_record::Entity::find()
            .filter(entity::provenance_record::Column::CpeItemId.eq(self.cpe_item.id))
            .one(connection)
            .await?
            .map(|record| ProvenanceRecordContext::new(self.graph, record)))
    }
}

impl Debug for CpeItemContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.cpe_item.fmt(f)
    }
}
