use crate::m0000020_create_cpe_name::CpeName;
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
                    .table(Deprecation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deprecation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Deprecation::CpeItemId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("deprecation_cpe_item_id_fkey")
                            .from(Deprecation::Table, Deprecation::CpeItemId)
                            .to(CpeItem::Table, CpeItem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(Deprecation::Date).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DeprecatedBy::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeprecatedBy::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeprecatedBy::DeprecationId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("deprecated_by_deprecation_id_fkey")
                            .from(DeprecatedBy::Table, DeprecatedBy::DeprecationId)
                            .to(Deprecation::Table, Deprecation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(DeprecatedBy::NameId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("deprecated_by_name_id_fkey")
                            .from(DeprecatedBy::Table, DeprecatedBy::NameId)
                            .to(CpeName::Table, CpeName::Id),
                    )
                    .col(
                        ColumnDef::new(DeprecatedBy::DeprecationType)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(DeprecatedBy::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Deprecation::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deprecation {
    Table,
    Id,
    CpeItemId,
    Date,
}

#[derive(DeriveIden)]
pub enum DeprecatedBy {
    Table,
    Id,
    DeprecationId,
    NameId,
    DeprecationType,
}
