use super::*;

/// Tests two empty tables are grouped and marked occupied.
///
/// Expected: Ok with both tables in the group and non-empty
#[tokio::test]
async fn groups_empty_tables() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_order_table(db).await?;
    let second = factory::create_order_table(db).await?;

    let group = TableGroupService::new(db)
        .create(CreateTableGroupParam {
            order_table_ids: vec![first.id, second.id],
        })
        .await?;

    assert_eq!(group.order_tables.len(), 2);
    assert!(group
        .order_tables
        .iter()
        .all(|t| t.table_group_id == Some(group.id) && !t.empty));

    Ok(())
}

/// Tests a single table, or one table listed twice, is not enough for a group.
///
/// Expected: Err(TableGroupErr(NotEnoughTables))
#[tokio::test]
async fn rejects_fewer_than_two_tables() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_order_table(db).await?;

    let service = TableGroupService::new(db);
    for order_table_ids in [vec![], vec![table.id], vec![table.id, table.id]] {
        let result = service
            .create(CreateTableGroupParam { order_table_ids })
            .await;

        assert!(matches!(
            result,
            Err(AppError::TableGroupErr(TableGroupError::NotEnoughTables(2)))
        ));
    }

    Ok(())
}

/// Tests a missing table aborts grouping.
///
/// Expected: Err(TableGroupErr(OrderTableNotFound)) and the existing table untouched
#[tokio::test]
async fn rejects_missing_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_order_table(db).await?;

    let result = TableGroupService::new(db)
        .create(CreateTableGroupParam {
            order_table_ids: vec![table.id, 999],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::TableGroupErr(TableGroupError::OrderTableNotFound))
    ));
    let stored = OrderTableRepository::new(db)
        .find_by_id(table.id)
        .await?
        .unwrap();
    assert!(stored.table_group_id.is_none());

    Ok(())
}

/// Tests an occupied table cannot be grouped.
///
/// Expected: Err(TableGroupErr(TableNotAvailable))
#[tokio::test]
async fn rejects_occupied_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let empty = factory::create_order_table(db).await?;
    let occupied = factory::create_occupied_table(db).await?;

    let result = TableGroupService::new(db)
        .create(CreateTableGroupParam {
            order_table_ids: vec![empty.id, occupied.id],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::TableGroupErr(TableGroupError::TableNotAvailable(id))) if id == occupied.id
    ));

    Ok(())
}

/// Tests a table of another group cannot be grouped again.
///
/// Expected: Err(TableGroupErr(TableNotAvailable))
#[tokio::test]
async fn rejects_already_grouped_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_table_group(db).await?;
    let grouped = factory::order_table::OrderTableFactory::new(db)
        .table_group_id(Some(group.id))
        .build()
        .await?;
    let free = factory::create_order_table(db).await?;

    let result = TableGroupService::new(db)
        .create(CreateTableGroupParam {
            order_table_ids: vec![free.id, grouped.id],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::TableGroupErr(TableGroupError::TableNotAvailable(id))) if id == grouped.id
    ));

    Ok(())
}
