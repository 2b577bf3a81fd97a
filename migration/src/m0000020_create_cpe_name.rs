use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CpeName::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CpeName::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CpeName::Part).string().not_null())
                    .col(ColumnDef::new(CpeName::Vendor).string().not_null())
                    .col(ColumnDef::new(CpeName::Product).string().not_null())
                    .col(ColumnDef::new(CpeName::Version).string().not_null())
                    .col(ColumnDef::new(CpeName::Update).string().not_null())
                    .col(ColumnDef::new(CpeName::Edition).string().not_null())
                    .col(ColumnDef::new(CpeName::SwEdition).string().not_null())
                    .col(ColumnDef::new(CpeName::TargetSw).string().not_null())
                    .col(ColumnDef::new(CpeName::TargetHw).string().not_null())
                    .col(ColumnDef::new(CpeName::Other).string().not_null())
                    .col(ColumnDef::new(CpeName::Language).string().not_null())
                    .to_owned(),
            )
            .await?;

        // the whole tuple identifies a name
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(Indexes::CpeNameUniqueIdx.to_string())
                    .table(CpeName::Table)
                    .col(CpeName::Part)
                    .col(CpeName::Vendor)
                    .col(CpeName::Product)
                    .col(CpeName::Version)
                    .col(CpeName::Update)
                    .col(CpeName::Edition)
                    .col(CpeName::SwEdition)
                    .col(CpeName::TargetSw)
                    .col(CpeName::TargetHw)
                    .col(CpeName::Other)
                    .col(CpeName::Language)
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
                    .table(CpeName::Table)
                    .name(Indexes::CpeNameUniqueIdx.to_string())
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CpeName::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Indexes {
    CpeNameUniqueIdx,
}

#[derive(DeriveIden)]
pub enum CpeName {
    Table,
    Id,
    // --
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
    Language,
}
