use super::*;

/// Tests an in-progress order on one of the tables is found.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_in_progress_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let idle = factory::create_occupied_table(db).await?;
    let busy = factory::create_occupied_table(db).await?;
    factory::order::OrderFactory::new(db, busy.id)
        .order_status("MEAL")
        .build()
        .await?;

    let exists = OrderRepository::new(db)
        .exists_by_order_table_ids_and_status_in(&[idle.id, busy.id], &OrderStatus::IN_PROGRESS)
        .await?;

    assert!(exists);

    Ok(())
}

/// Tests completed orders do not count as in progress.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_completed_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_occupied_table(db).await?;
    factory::order::OrderFactory::new(db, table.id)
        .order_status("COMPLETION")
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    assert!(!repo
        .exists_by_order_table_id_and_status_in(table.id, &OrderStatus::IN_PROGRESS)
        .await?);
    assert!(repo
        .exists_by_order_table_id_and_status_in(table.id, &[OrderStatus::Completion])
        .await?);

    Ok(())
}

/// Tests orders on other tables are not matched.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_orders_on_other_tables() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (busy, _, _) = factory::helpers::create_order_with_dependencies(db).await?;
    let other = factory::create_occupied_table(db).await?;

    let repo = OrderRepository::new(db);

    assert!(!repo
        .exists_by_order_table_ids_and_status_in(&[other.id], &OrderStatus::IN_PROGRESS)
        .await?);
    assert!(!repo
        .exists_by_order_table_ids_and_status_in(&[], &OrderStatus::IN_PROGRESS)
        .await?);
    assert!(repo
        .exists_by_order_table_ids_and_status_in(&[busy.id], &OrderStatus::IN_PROGRESS)
        .await?);

    Ok(())
}
