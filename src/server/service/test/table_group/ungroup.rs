use super::*;

async fn grouped_tables(
    db: &sea_orm::DatabaseConnection,
) -> Result<(i32, Vec<i32>), AppError> {
    let first = factory::create_order_table(db).await?;
    let second = factory::create_order_table(db).await?;

    let group = TableGroupService::new(db)
        .create(CreateTableGroupParam {
            order_table_ids: vec![first.id, second.id],
        })
        .await?;

    Ok((group.id, vec![first.id, second.id]))
}

/// Tests ungrouping detaches every member table and marks it empty.
///
/// Expected: Ok with both tables ungrouped and empty
#[tokio::test]
async fn ungroups_tables() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group_id, table_ids) = grouped_tables(db).await?;

    TableGroupService::new(db).ungroup(group_id).await?;

    let tables = OrderTableRepository::new(db)
        .find_all_by_ids(&table_ids)
        .await?;
    assert_eq!(tables.len(), 2);
    assert!(tables
        .iter()
        .all(|t| t.table_group_id.is_none() && t.empty));

    Ok(())
}

/// Tests completed orders do not block ungrouping.
///
/// Expected: Ok
#[tokio::test]
async fn ungroups_with_completed_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group_id, table_ids) = grouped_tables(db).await?;
    factory::order::OrderFactory::new(db, table_ids[0])
        .order_status("COMPLETION")
        .build()
        .await?;

    let result = TableGroupService::new(db).ungroup(group_id).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a missing group is rejected.
///
/// Expected: Err(TableGroupErr(TableGroupNotFound))
#[tokio::test]
async fn rejects_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TableGroupService::new(db).ungroup(999).await;

    assert!(matches!(
        result,
        Err(AppError::TableGroupErr(TableGroupError::TableGroupNotFound))
    ));

    Ok(())
}

/// Tests a member table with an order in progress blocks ungrouping.
///
/// Expected: Err(TableGroupErr(OrderInProgress)) and the tables still grouped
#[tokio::test]
async fn rejects_order_in_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group_id, table_ids) = grouped_tables(db).await?;
    factory::order::OrderFactory::new(db, table_ids[1])
        .order_status("MEAL")
        .build()
        .await?;

    let result = TableGroupService::new(db).ungroup(group_id).await;

    assert!(matches!(
        result,
        Err(AppError::TableGroupErr(TableGroupError::OrderInProgress))
    ));
    let tables = OrderTableRepository::new(db)
        .find_all_by_table_group_id(group_id)
        .await?;
    assert_eq!(tables.len(), 2);

    Ok(())
}
