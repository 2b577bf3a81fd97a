use cpedict_test_context::CpedictContext;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Statement};
use test_context::test_context;
use test_log::test;

#[test_context(CpedictContext, skip_teardown)]
#[test(tokio::test)]
async fn test_migrations(ctx: CpedictContext) -> Result<(), anyhow::Error> {
    let db = ctx.db;

    // the context already applied all migrations
    let migrations = Migrator::get_applied_migrations(&db).await?;
    assert_eq!(migrations.len(), Migrator::migrations().len());

    db.refresh().await?;

    let reapplied = Migrator::get_applied_migrations(&db).await?;
    assert_eq!(reapplied.len(), Migrator::migrations().len());

    Ok(())
}

#[test_context(CpedictContext, skip_teardown)]
#[test(tokio::test)]
async fn cpe_name_tuple_is_unique(ctx: CpedictContext) -> Result<(), anyhow::Error> {
    let insert = r#"INSERT INTO cpe_name
        (part, vendor, product, version, "update", edition, sw_edition, target_sw, target_hw, other, language)
        VALUES ('"a"', '"mozilla"', '"firefox"', '"22"', 'ANY', 'ANY', 'ANY', 'ANY', 'ANY', 'ANY', 'ANY')"#;

    let backend = ctx.db.get_database_backend();
    ctx.db
        .execute(Statement::from_string(backend, insert))
        .await?;
    let duplicate = ctx
        .db
        .execute(Statement::from_string(backend, insert))
        .await;

    assert!(duplicate.is_err());

    Ok(())
}

#[test_context(CpedictContext, skip_teardown)]
#[test(tokio::test)]
async fn foreign_keys_are_enforced(ctx: CpedictContext) -> Result<(), anyhow::Error> {
    let backend = ctx.db.get_database_backend();
    let orphan = ctx
        .db
        .execute(Statement::from_string(
            backend,
            "INSERT INTO title (cpe_item_id, language, value) VALUES (4711, 'en-US', 'Firefox 22')",
        ))
        .await;

    assert!(orphan.is_err());

    Ok(())
}
