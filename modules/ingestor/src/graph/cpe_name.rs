use crate::graph::{error::Error, Graph};
use cpedict_common::cpe::{Attribute, Wfn};
use cpedict_entity as entity;
use entity::cpe_name;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Select};
use sea_query::OnConflict;
use std::fmt::{Debug, Formatter};
use tracing::instrument;

/// The column holding an attribute.
fn column(attribute: Attribute) -> cpe_name::Column {
    match attribute {
        Attribute::Part => cpe_name::Column::Part,
        Attribute::Vendor => cpe_name::Column::Vendor,
        Attribute::Product => cpe_name::Column::Product,
        Attribute::Version => cpe_name::Column::Version,
        Attribute::Update => cpe_name::Column::Update,
        Attribute::Edition => cpe_name::Column::Edition,
        Attribute::Language => cpe_name::Column::Language,
        Attribute::SwEdition => cpe_name::Column::SwEdition,
        Attribute::TargetSw => cpe_name::Column::TargetSw,
        Attribute::TargetHw => cpe_name::Column::TargetHw,
        Attribute::Other => cpe_name::Column::Other,
    }
}

/// Find the row matching all 11 attributes exactly.
fn find_exact(wfn: &Wfn) -> Select<cpe_name::Entity> {
    Attribute::ALL
        .into_iter()
        .fold(cpe_name::Entity::find(), |query, attribute| {
            query.filter(column(attribute).eq(wfn.get(attribute).to_stored()))
        })
}

impl Graph {
    pub async fn get_cpe_name<C: ConnectionTrait>(
        &self,
        wfn: &Wfn,
        connection: &C,
    ) -> Result<Option<CpeNameContext<'_>>, Error> {
        Ok(find_exact(wfn)
            .one(connection)
            .await?
            .map(|name| CpeNameContext::new(self, name)))
    }

    pub async fn get_cpe_name_by_id<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<CpeNameContext<'_>>, Error> {
        Ok(cpe_name::Entity::find_by_id(id)
            .one(connection)
            .await?
            .map(|name| CpeNameContext::new(self, name)))
    }

    /// Get or create the row of a CPE Name.
    ///
    /// The insert does nothing if a concurrent import created the same tuple in the meantime.
    #[instrument(skip(self, connection), err)]
    pub async fn ingest_cpe_name<C: ConnectionTrait>(
        &self,
        wfn: &Wfn,
        connection: &C,
    ) -> Result<CpeNameContext<'_>, Error> {
        if let Some(found) = self.get_cpe_name(wfn, connection).await? {
            return Ok(found);
        }

        cpe_name::Entity::insert(cpe_name::ActiveModel::from_wfn(wfn))
            .on_conflict(
                OnConflict::columns(Attribute::ALL.map(column))
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(connection)
            .await?;

        log::debug!("created CPE Name: {wfn}");

        self.get_cpe_name(wfn, connection)
            .await?
            .ok_or_else(|| Error::CpeNameNotFound(wfn.to_string()))
    }
}

#[derive(Clone)]
pub struct CpeNameContext<'g> {
    pub graph: &'g Graph,
    pub cpe_name: cpe_name::Model,
}

impl<'g> CpeNameContext<'g> {
    pub fn new(graph: &'g Graph, cpe_name: cpe_name::Model) -> Self {
        Self { graph, cpe_name }
    }

    pub fn wfn(&self) -> Result<Wfn, Error> {
        Ok(self.cpe_name.to_wfn()?)
    }
}

impl Debug for CpeNameContext<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.cpe_name.fmt(f)
    }
}
