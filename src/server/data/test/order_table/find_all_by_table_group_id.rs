use super::*;

/// Tests only members of the requested group are returned.
///
/// Expected: Ok with the two grouped tables
#[tokio::test]
async fn returns_group_members_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_table_group(db).await?;
    let other_group = factory::create_table_group(db).await?;
    let first = factory::order_table::OrderTableFactory::new(db)
        .table_group_id(Some(group.id))
        .build()
        .await?;
    let second = factory::order_table::OrderTableFactory::new(db)
        .table_group_id(Some(group.id))
        .build()
        .await?;
    factory::order_table::OrderTableFactory::new(db)
        .table_group_id(Some(other_group.id))
        .build()
        .await?;
    factory::create_order_table(db).await?;

    let tables = OrderTableRepository::new(db)
        .find_all_by_table_group_id(group.id)
        .await?;

    let ids: Vec<i32> = tables.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
