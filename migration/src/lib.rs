pub use sea_orm_migration::prelude::*;

mod m0000010_create_cpe_list;
mod m0000020_create_cpe_name;
mod m0000030_create_cpe_item;
mod m0000040_create_item_details;
mod m0000050_create_deprecation;
mod m0000060_create_provenance;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m0000010_create_cpe_list::Migration),
            Box::new(m0000020_create_cpe_name::Migration),
            Box::new(m0000030_create_cpe_item::Migration),
            Box::new(m0000040_create_item_details::Migration),
            Box::new(m0000050_create_deprecation::Migration),
            Box::new(m0000060_create_provenance::Migration),
        ]
    }
}
