use crate::graph::{error::Error, Graph};
use cpedict_entity::organization;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use time::OffsetDateTime;
use tracing::instrument;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizationInformation {
    pub system_id: String,
    pub name: String,
    pub action_date: OffsetDateTime,
    pub description: Option<String>,
}

pub struct OrganizationContext<'g> {
    pub graph: &'g Graph,
    pub organization: organization::Model,
}

impl<'g> OrganizationContext<'g> {
    pub fn new(graph: &'g Graph, organization: organization::Model) -> Self {
        Self {
            graph,
            organization,
        }
    }
}

impl Graph {
    /// Create an organization.
    ///
    /// Every call creates a new row, as the action date and description belong to one appearance
    /// of the organization.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn ingest_organization<C: ConnectionTrait>(
        &self,
        information: OrganizationInformation,
        connection: &C,
    ) -> Result<OrganizationContext<'_>, Error> {
        let OrganizationInformation {
            system_id,
            name,
            action_date,
            description,
        } = information;

        let model = organization::ActiveModel {
            id: Default::default(),
            system_id: Set(system_id),
            name: Set(name),
            action_date: Set(action_date),
            description: Set(description),
        };

        Ok(OrganizationContext::new(
            self,
            model.insert(connection).await?,
        ))
    }
}
