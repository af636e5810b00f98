use super::*;

/// Tests assigning tables to a group marks them occupied.
///
/// Expected: Ok(2) with both tables grouped and non-empty, third table untouched
#[tokio::test]
async fn assigns_tables_to_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_table_group(db).await?;
    let first = factory::create_order_table(db).await?;
    let second = factory::create_order_table(db).await?;
    let untouched = factory::create_order_table(db).await?;

    let repo = OrderTableRepository::new(db);
    let updated = repo
        .update_table_group(&[first.id, second.id], Some(group.id), false)
        .await?;

    assert_eq!(updated, 2);
    for id in [first.id, second.id] {
        let table = repo.find_by_id(id).await?.unwrap();
        assert_eq!(table.table_group_id, Some(group.id));
        assert!(!table.empty);
    }
    let table = repo.find_by_id(untouched.id).await?.unwrap();
    assert!(table.table_group_id.is_none());
    assert!(table.empty);

    Ok(())
}

/// Tests detaching tables clears the group and marks them empty.
///
/// Expected: Ok(2) with both tables ungrouped and empty
#[tokio::test]
async fn detaches_tables_from_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_table_group(db).await?;
    let first = factory::order_table::OrderTableFactory::new(db)
        .table_group_id(Some(group.id))
        .empty(false)
        .build()
        .await?;
    let second = factory::order_table::OrderTableFactory::new(db)
        .table_group_id(Some(group.id))
        .empty(false)
        .build()
        .await?;

    let repo = OrderTableRepository::new(db);
    let updated = repo
        .update_table_group(&[first.id, second.id], None, true)
        .await?;

    assert_eq!(updated, 2);
    assert!(repo.find_all_by_table_group_id(group.id).await?.is_empty());
    let table = repo.find_by_id(first.id).await?.unwrap();
    assert!(table.empty);
    assert!(table.table_group_id.is_none());

    Ok(())
}

/// Tests an empty ID list performs no update.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_no_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = OrderTableRepository::new(db)
        .update_table_group(&[], None, true)
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
