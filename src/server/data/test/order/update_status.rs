use super::*;

/// Tests the status is updated and the order is returned with its line items.
///
/// Expected: Ok with status MEAL
#[tokio::test]
async fn updates_order_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo.update_status(order.id, OrderStatus::Meal).await?;

    assert_eq!(updated.id, order.id);
    assert_eq!(updated.order_status, OrderStatus::Meal);
    assert_eq!(updated.order_line_items.len(), 1);

    let reloaded = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded.order_status, OrderStatus::Meal);

    Ok(())
}
