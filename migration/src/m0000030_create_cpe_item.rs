use crate::m0000010_create_cpe_list::CpeList;
use crate::m0000020_create_cpe_name::CpeName;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CpeItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CpeItem::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CpeItem::NameId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("cpe_item_name_id_fkey")
                            .from(CpeItem::Table, CpeItem::NameId)
                            .to(CpeName::Table, CpeName::Id),
                    )
                    .col(
                        ColumnDef::new(CpeItem::Deprecated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(CpeItem::DeprecatedById).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("cpe_item_deprecated_by_id_fkey")
                            .from(CpeItem::Table, CpeItem::DeprecatedById)
                            .to(CpeName::Table, CpeName::Id),
                    )
                    .col(ColumnDef::new(CpeItem::DeprecationDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(CpeItem::CpeListId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("cpe_item_cpe_list_id_fkey")
                            .from(CpeItem::Table, CpeItem::CpeListId)
                            .to(CpeList::Table, CpeList::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(Indexes::CpeItemNameListIdx.to_string())
                    .table(CpeItem::Table)
                    .col(CpeItem::NameId)
                    .col(CpeItem::CpeListId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(CpeItem::Table)
                    .name(Indexes::CpeItemNameListIdx.to_string())
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CpeItem::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Indexes {
    CpeItemNameListIdx,
}

#[derive(DeriveIden)]
pub enum CpeItem {
    Table,
    Id,
    NameId,
    Deprecated,
    DeprecatedById,
    DeprecationDate,
    CpeListId,
}
