use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CpeList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CpeList::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CpeList::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Generator::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Generator::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Generator::CpeListId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("generator_cpe_list_id_fkey")
                            .from(Generator::Table, Generator::CpeListId)
                            .to(CpeList::Table, CpeList::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(
                        ColumnDef::new(Generator::ProductName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Generator::ProductVersion)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Generator::SchemaVersion)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Generator::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Generator::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CpeList::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CpeList {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Generator {
    Table,
    Id,
    CpeListId,
    ProductName,
    ProductVersion,
    SchemaVersion,
    Timestamp,
}
