//! Testing parallel imports

use cpedict_entity as entity;
use cpedict_test_context::{document_bytes, CpedictContext};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_context::{futures, test_context};
use test_log::test;

/// Import the same dictionary several times in parallel
#[test_context(CpedictContext)]
#[test(tokio::test(flavor = "multi_thread", worker_threads = 4))]
async fn dictionary_parallel(ctx: &CpedictContext) -> Result<(), anyhow::Error> {
    const NUM: usize = 5;

    let data = document_bytes("official-cpe-dictionary_v2.3-sample.xml").await?;

    let mut tasks = vec![];
    for _ in 0..NUM {
        let service = ctx.ingestor.clone();
        let data = data.clone();

        tasks.push(async move { service.ingest(data.as_slice()).await });
    }

    let results = futures::future::join_all(tasks).await;
    for result in results {
        assert_eq!(result?.items, 4);
    }

    // names are shared between the lists
    assert_eq!(
        entity::cpe_list::Entity::find().count(&ctx.db).await?,
        NUM as u64
    );
    assert_eq!(
        entity::cpe_item::Entity::find().count(&ctx.db).await?,
        4 * NUM as u64
    );
    assert_eq!(entity::cpe_name::Entity::find().count(&ctx.db).await?, 5);

    Ok(())
}
