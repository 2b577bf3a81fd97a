use crate::graph::{error::Error, organization::OrganizationContext, Graph};
use cpedict_entity as entity;
use entity::{
    change_description, change_type::ChangeType, evidence_reference,
    evidence_type::EvidenceType, provenance_record, provenance_record_authority,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set,
};
use std::fmt::Debug;
use time::OffsetDateTime;
use tracing::instrument;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeDescriptionInformation {
    pub change_type: ChangeType,
    pub date: OffsetDateTime,
    pub comment: Option<String>,
    pub evidence_reference_id: Option<i32>,
}

impl Graph {
    #[instrument(skip(self, connection), err)]
    pub async fn ingest_evidence_reference<C: ConnectionTrait>(
        &self,
        href: String,
        evidence: EvidenceType,
        connection: &C,
    ) -> Result<evidence_reference::Model, Error> {
        let model = evidence_reference::ActiveModel {
            id: Default::default(),
            href: Set(href),
            evidence: Set(evidence),
        };

        Ok(model.insert(connection).await?)
    }
}

#[derive(Clone)]
pub struct ProvenanceRecordContext<'g> {
    pub graph: &'g Graph,
    pub provenance_record: provenance_record::Model,
}

impl<'g> ProvenanceRecordContext<'g> {
    pub fn new(graph: &'g Graph, provenance_record: provenance_record::Model) -> Self {
        Self {
            graph,
            provenance_record,
        }
    }

    pub async fn ingest_change_description<C: ConnectionTrait>(
        &self,
        information: ChangeDescriptionInformation,
        connection: &C,
    ) -> Result<change_description::Model, Error> {
        let ChangeDescriptionInformation {
            change_type,
            date,
            comment,
            evidence_reference_id,
        } = information;

        let model = change_description::ActiveModel {
            id: Default::default(),
            provenance_record_id: Set(self.provenance_record.id),
            change_type: Set(change_type),
            date: Set(date),
            comment: Set(comment),
            evidence_reference_id: Set(evidence_reference_id),
        };

        Ok(model.insert(connection).await?)
    }

    /// Link an authority organization to the record.
    pub async fn add_authority<C: ConnectionTrait>(
        &self,
        organization_id: i32,
        connection: &C,
    ) -> Result<(), Error> {
        let model = provenance_record_authority::ActiveModel {
            provenance_record_id: Set(self.provenance_record.id),
            organization_id: Set(organization_id),
        };

        provenance_record_authority::Entity::insert(model)
            .exec_without_returning(connection)
            .await?;

        Ok(())
    }

    pub async fn submitter<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Option<OrganizationContext<'g>>, Error> {
        Ok(
            entity::organization::Entity::find_by_id(self.provenance_record.submitter_id)
                .one(connection)
                .await?
                .map(|organization| OrganizationContext::new(self.graph, organization)),
        )
    }

    pub async fn authorities<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<OrganizationContext<'g>>, Error> {
        Ok(self
            .provenance_record
            .find_related(entity::organization::Entity)
            .order_by_asc(entity::organization::Column::Id)
            .all(connection)
            .await?
            .into_iter()
            .map(|organization| OrganizationContext::new(self.graph, organization))
            .collect())
    }

    pub async fn change_descriptions<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<change_description::Model>, Error> {
        Ok(self
            .provenance_record
            .find_related(change_description::Entity)
            .order_by_asc(change_description::Column::Id)
            .all(connection)
            .await?)
    }
}

impl Debug for ProvenanceRecordContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.provenance_record.fmt(f)
    }
}
