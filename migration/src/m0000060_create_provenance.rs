use crate::m0000030_create_cpe_item::CpeItem;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organization::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organization::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Organization::SystemId).string().not_null())
                    .col(ColumnDef::new(Organization::Name).string().not_null())
                    .col(
                        ColumnDef::new(Organization::ActionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Organization::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EvidenceReference::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvidenceReference::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EvidenceReference::Href).string().not_null())
                    .col(
                        ColumnDef::new(EvidenceReference::Evidence)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProvenanceRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProvenanceRecord::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProvenanceRecord::CpeItemId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("provenance_record_cpe_item_id_fkey")
                            .from(ProvenanceRecord::Table, ProvenanceRecord::CpeItemId)
                            .to(CpeItem::Table, CpeItem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(
                        ColumnDef::new(ProvenanceRecord::SubmitterId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("provenance_record_submitter_id_fkey")
                            .from(ProvenanceRecord::Table, ProvenanceRecord::SubmitterId)
                            .to(Organization::Table, Organization::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProvenanceRecordAuthority::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProvenanceRecordAuthority::ProvenanceRecordId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("provenance_record_authority_provenance_record_id_fkey")
                            .from(
                                ProvenanceRecordAuthority::Table,
                                ProvenanceRecordAuthority::ProvenanceRecordId,
                            )
                            .to(ProvenanceRecord::Table, ProvenanceRecord::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(
                        ColumnDef::new(ProvenanceRecordAuthority::OrganizationId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("provenance_record_authority_organization_id_fkey")
                            .from(
                                ProvenanceRecordAuthority::Table,
                                ProvenanceRecordAuthority::OrganizationId,
                            )
                            .to(Organization::Table, Organization::Id),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-provenance-record-authority")
                            .col(ProvenanceRecordAuthority::ProvenanceRecordId)
                            .col(ProvenanceRecordAuthority::OrganizationId)
                            .primary(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChangeDescription::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChangeDescription::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChangeDescription::ProvenanceRecordId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("change_description_provenance_record_id_fkey")
                            .from(
                                ChangeDescription::Table,
                                ChangeDescription::ProvenanceRecordId,
                            )
                            .to(ProvenanceRecord::Table, ProvenanceRecord::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(
                        ColumnDef::new(ChangeDescription::ChangeType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChangeDescription::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChangeDescription::Comment).text())
                    .col(ColumnDef::new(ChangeDescription::EvidenceReferenceId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("change_description_evidence_reference_id_fkey")
                            .from(
                                ChangeDescription::Table,
                                ChangeDescription::EvidenceReferenceId,
                            )
                            .to(EvidenceReference::Table, EvidenceReference::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            ChangeDescription::Table.into_iden(),
            ProvenanceRecordAuthority::Table.into_iden(),
            ProvenanceRecord::Table.into_iden(),
            EvidenceReference::Table.into_iden(),
            Organization::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Organization {
    Table,
    Id,
    SystemId,
    Name,
    ActionDate,
    Description,
}

#[derive(DeriveIden)]
pub enum EvidenceReference {
    Table,
    Id,
    Href,
    Evidence,
}

#[derive(DeriveIden)]
pub enum ProvenanceRecord {
    Table,
    Id,
    CpeItemId,
    SubmitterId,
}

#[derive(DeriveIden)]
pub enum ProvenanceRecordAuthority {
    Table,
    ProvenanceRecordId,
    OrganizationId,
}

#[derive(DeriveIden)]
pub enum ChangeDescription {
    Table,
    Id,
    ProvenanceRecordId,
    ChangeType,
    Date,
    Comment,
    EvidenceReferenceId,
}
