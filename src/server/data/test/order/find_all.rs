use super::*;
use crate::server::error::internal::InternalError;

/// Tests every order is returned with its own line items.
///
/// Expected: Ok with two orders in insertion order
#[tokio::test]
async fn returns_orders_with_line_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (table, menu, first) = factory::helpers::create_order_with_dependencies(db).await?;
    let second = factory::order::OrderFactory::new(db, table.id)
        .order_status("MEAL")
        .build()
        .await?;
    factory::create_order_line_item(db, second.id, &menu, 1).await?;
    factory::create_order_line_item(db, second.id, &menu, 4).await?;

    let orders = OrderRepository::new(db).find_all().await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, first.id);
    assert_eq!(orders[0].order_line_items.len(), 1);
    assert_eq!(orders[1].id, second.id);
    assert_eq!(orders[1].order_status, OrderStatus::Meal);
    assert_eq!(orders[1].order_line_items.len(), 2);

    Ok(())
}

/// Tests an unknown stored status is reported as an internal error.
///
/// Expected: Err(InternalErr(ParseOrderStatus))
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_occupied_table(db).await?;
    factory::order::OrderFactory::new(db, table.id)
        .order_status("SERVED")
        .build()
        .await?;

    let result = OrderRepository::new(db).find_all().await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::ParseOrderStatus(_)))
    ));

    Ok(())
}
