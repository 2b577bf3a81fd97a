use crate::m0000030_create_cpe_item::CpeItem;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// The owning item column, shared by all detail tables.
fn cpe_item_fk<T: IntoIden + Copy + 'static>(
    table: T,
    column: T,
    name: &str,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(CpeItem::Table, CpeItem::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Title::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Title::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Title::CpeItemId).integer().not_null())
                    .foreign_key(&mut cpe_item_fk(
                        Title::Table,
                        Title::CpeItemId,
                        "title_cpe_item_id_fkey",
                    ))
                    .col(ColumnDef::new(Title::Language).string().not_null())
                    .col(ColumnDef::new(Title::Value).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Note::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Note::CpeItemId).integer().not_null())
                    .foreign_key(&mut cpe_item_fk(
                        Note::Table,
                        Note::CpeItemId,
                        "note_cpe_item_id_fkey",
                    ))
                    .col(ColumnDef::new(Note::Language).string().not_null())
                    .col(ColumnDef::new(Note::Value).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reference::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reference::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reference::CpeItemId).integer().not_null())
                    .foreign_key(&mut cpe_item_fk(
                        Reference::Table,
                        Reference::CpeItemId,
                        "reference_cpe_item_id_fkey",
                    ))
                    .col(ColumnDef::new(Reference::Href).string().not_null())
                    .col(ColumnDef::new(Reference::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Check::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Check::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Check::CpeItemId).integer().not_null())
                    .foreign_key(&mut cpe_item_fk(
                        Check::Table,
                        Check::CpeItemId,
                        "check_cpe_item_id_fkey",
                    ))
                    .col(ColumnDef::new(Check::System).string().not_null())
                    .col(ColumnDef::new(Check::Href).string())
                    .col(ColumnDef::new(Check::Value).string().not_null())
                    .to_owned(),
            )
            .await?;

        // one check per check system
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(Indexes::CheckSystemItemIdx.to_string())
                    .table(Check::Table)
                    .col(Check::System)
                    .col(Check::CpeItemId)
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
                    .table(Check::Table)
                    .name(Indexes::CheckSystemItemIdx.to_string())
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Check::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reference::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Note::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Title::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Indexes {
    CheckSystemItemIdx,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Title {
    Table,
    Id,
    CpeItemId,
    Language,
    Value,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Note {
    Table,
    Id,
    CpeItemId,
    Language,
    Value,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Reference {
    Table,
    Id,
    CpeItemId,
    Href,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Check {
    Table,
    Id,
    CpeItemId,
    System,
    Href,
    Value,
}
