use cpedict_common::cpe::{CpeVersion, Wfn};
use cpedict_entity as entity;
use cpedict_module_ingestor::graph::{
    cpe_item::CpeItemInformation, organization::OrganizationInformation,
};
use cpedict_test_context::CpedictContext;
use entity::deprecation_type::DeprecationType;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_context::test_context;
use test_log::test;
use time::macros::datetime;

#[test_context(CpedictContext, skip_teardown)]
#[test(tokio::test)]
async fn cpe_name_get_or_create(ctx: CpedictContext) -> Result<(), anyhow::Error> {
    let wfn = Wfn::from_name("cpe:/a:mozilla:firefox:22", CpeVersion::V2_2)?;

    assert!(ctx.graph.get_cpe_name(&wfn, &ctx.db).await?.is_none());

    let first = ctx.graph.ingest_cpe_name(&wfn, &ctx.db).await?;
    let second = ctx.graph.ingest_cpe_name(&wfn, &ctx.db).await?;
    assert_eq!(first.cpe_name.id, second.cpe_name.id);
    assert_eq!(first.wfn()?, wfn);

    // a wildcard and a missing value are different names
    let other = Wfn::from_name(
        "cpe:2.3:a:mozilla:firefox:22:-:*:*:*:*:*:*",
        CpeVersion::V2_3,
    )?;
    let third = ctx.graph.ingest_cpe_name(&other, &ctx.db).await?;
    assert_ne!(first.cpe_name.id, third.cpe_name.id);

    assert_eq!(entity::cpe_name::Entity::find().count(&ctx.db).await?, 2);

    Ok(())
}

#[test_context(CpedictContext, skip_teardown)]
#[test(tokio::test)]
async fn deprecated_by_requires_its_deprecation(ctx: CpedictContext) -> Result<(), anyhow::Error> {
    let wfn = Wfn::from_name("cpe:/a:adobe:acrobat_reader:5.0", CpeVersion::V2_2)?;
    let name = ctx.graph.ingest_cpe_name(&wfn, &ctx.db).await?;

    let list = ctx.graph.ingest_cpe_list("test", &ctx.db).await?;
    let item = list
        .ingest_cpe_item(
            CpeItemInformation {
                name_id: name.cpe_name.id,
                deprecated: true,
                deprecated_by_id: None,
                deprecation_date: None,
            },
            &ctx.db,
        )
        .await?;

    let deprecation = item
        .ingest_deprecation(Some(datetime!(2010-01-01 00:00:00 UTC)), &ctx.db)
        .await?;
    deprecation
        .ingest_deprecated_by(name.cpe_name.id, DeprecationType::NameRemoval, &ctx.db)
        .await?;

    // a replacement must point to an existing deprecation
    let orphan = entity::deprecated_by::Entity::insert(entity::deprecated_by::ActiveModel {
        id: Default::default(),
        deprecation_id: sea_orm::Set(deprecation.deprecation.id + 100),
        name_id: sea_orm::Set(name.cpe_name.id),
        deprecation_type: sea_orm::Set(DeprecationType::NameRemoval),
    })
    .exec(&ctx.db)
    .await;
    assert!(orphan.is_err());

    assert_eq!(deprecation.deprecated_by(&ctx.db).await?.len(), 1);

    Ok(())
}

#[test_context(CpedictContext, skip_teardown)]
#[test(tokio::test)]
async fn organizations_are_not_deduplicated(ctx: CpedictContext) -> Result<(), anyhow::Error> {
    let information = OrganizationInformation {
        system_id: "http://nvd.nist.gov".into(),
        name: "NIST".into(),
        action_date: datetime!(2022-06-08 12:00:00 UTC),
        description: None,
    };

    let first = ctx
        .graph
        .ingest_organization(information.clone(), &ctx.db)
        .await?;
    let second = ctx.graph.ingest_organization(information, &ctx.db).await?;

    assert_ne!(first.organization.id, second.organization.id);
    assert_eq!(entity::organization::Entity::find().count(&ctx.db).await?, 2);

    Ok(())
}

#[test_context(CpedictContext, skip_teardown)]
#[test(tokio::test)]
async fn lists_in_import_order(ctx: CpedictContext) -> Result<(), anyhow::Error> {
    ctx.graph.ingest_cpe_list("first", &ctx.db).await?;
    ctx.graph.ingest_cpe_list("second", &ctx.db).await?;

    let lists = ctx.graph.get_cpe_lists(&ctx.db).await?;
    assert_eq!(
        lists
            .iter()
            .map(|list| list.cpe_list.name.as_str())
            .collect::<Vec<_>>(),
        vec!["first", "second"]
    );

    assert!(ctx.graph.get_cpe_list(i32::MAX, &ctx.db).await?.is_none());
    assert!(ctx.graph.get_cpe_items(i32::MAX, &ctx.db).await?.is_empty());

    Ok(())
}
