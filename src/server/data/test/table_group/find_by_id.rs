use super::*;

/// Tests the group is returned with its member tables.
///
/// Expected: Ok(Some) with two member tables
#[tokio::test]
async fn returns_group_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_table_group(db).await?;
    for _ in 0..2 {
        factory::order_table::OrderTableFactory::new(db)
            .table_group_id(Some(group.id))
            .empty(false)
            .build()
            .await?;
    }

    let found = TableGroupRepository::new(db).find_by_id(group.id).await?;

    let found = found.unwrap();
    assert_eq!(found.order_tables.len(), 2);
    assert!(found
        .order_tables
        .iter()
        .all(|t| t.table_group_id == Some(group.id)));

    Ok(())
}

/// Tests a missing group returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = TableGroupRepository::new(db).find_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
