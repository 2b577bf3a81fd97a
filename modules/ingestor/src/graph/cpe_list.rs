use crate::graph::{cpe_item::CpeItemContext, error::Error, Graph};
use cpedict_entity as entity;
use entity::cpe_list;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use std::fmt::Debug;
use tracing::instrument;

impl Graph {
    #[instrument(skip(self, connection), err)]
    pub async fn ingest_cpe_list<C: ConnectionTrait>(
        &self,
        name: impl Into<String> + Debug,
        connection: &C,
    ) -> Result<CpeListContext<'_>, Error> {
        let model = cpe_list::ActiveModel {
            id: Default::default(),
            name: Set(name.into()),
        };

        Ok(CpeListContext::new(self, model.insert(connection).await?))
    }

    pub async fn get_cpe_list<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<CpeListContext<'_>>, Error> {
        Ok(cpe_list::Entity::find_by_id(id)
            .one(connection)
            .await?
            .map(|cpe_list| CpeListContext::new(self, cpe_list)))
    }

    pub async fn get_cpe_lists<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<CpeListContext<'_>>, Error> {
        Ok(cpe_list::Entity::find()
            .order_by_asc(cpe_list::Column::Id)
            .all(connection)
            .await?
            .into_iter()
            .map(|cpe_list| CpeListContext::new(self, cpe_list))
            .collect())
    }

    /// The items of a list, in import order.
    pub async fn get_cpe_items<C: ConnectionTrait>(
        &self,
        cpe_list_id: i32,
        connection: &C,
    ) -> Result<Vec<CpeItemContext<'_>>, Error> {
        match self.get_cpe_list(cpe_list_id, connection).await? {
            Some(cpe_list) => cpe_list.get_cpe_items(connection).await,
            None => Ok(vec![]),
        }
    }
}

#[derive(Clone)]
pub struct CpeListContext<'g> {
    pub graph: &'g Graph,
    pub cpe_list: cpe_list::Model,
}

impl<'g> CpeListContext<'g> {
    pub fn new(graph: &'g Graph, cpe_list: cpe_list::Model) -> Self {
        Self { graph, cpe_list }
    }

    pub async fn get_cpe_items<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<CpeItemContext<'g>>, Error> {
        Ok(self
            .cpe_list
            .find_related(entity::cpe_item::Entity)
            .order_by_asc(entity::cpe_item::Column::Id)
            .all(connection)
            .await?
            .into_iter()
            .map(|item| CpeItemContext::new(self.graph, item))
            .collect())
    }

    pub async fn get_generator<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Option<entity::generator::Model>, Error> {
        Ok(self
            .cpe_list
            .find_related(entity::generator::Entity)
            .one(connection)
            .await?)
    }
}

impl Debug for CpeListContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.cpe_list.fmt(f)
    }
}
