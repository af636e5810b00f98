use super::*;
use chrono::{TimeZone, Utc};

/// Tests an order on an occupied table defaults to COOKING and snapshots the menu.
///
/// Expected: Ok with COOKING order carrying the menu name and price
#[tokio::test]
async fn creates_cooking_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let table = factory::create_occupied_table(db).await?;

    let before = Utc::now();
    let order = OrderService::new(db)
        .create(order_param(table.id, vec![line_item(menu.id, 2)]))
        .await?;

    assert_eq!(order.order_table_id, table.id);
    assert_eq!(order.order_status, OrderStatus::Cooking);
    assert!(order.ordered_time.timestamp() >= before.timestamp());
    assert_eq!(order.order_line_items.len(), 1);
    assert_eq!(order.order_line_items[0].name, menu.name);
    assert_eq!(order.order_line_items[0].price, menu.price);
    assert_eq!(order.order_line_items[0].quantity, 2);

    Ok(())
}

/// Tests a provided status and ordered time are kept.
///
/// Expected: Ok with MEAL order at the given time
#[tokio::test]
async fn keeps_provided_status_and_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let table = factory::create_occupied_table(db).await?;
    let ordered_time = Utc.with_ymd_and_hms(2026, 3, 1, 18, 30, 0).unwrap();

    let mut param = order_param(table.id, vec![line_item(menu.id, 1)]);
    param.order_status = Some(OrderStatus::Meal);
    param.ordered_time = Some(ordered_time);

    let order = OrderService::new(db).create(param).await?;

    assert_eq!(order.order_status, OrderStatus::Meal);
    assert_eq!(order.ordered_time, ordered_time);

    Ok(())
}

/// Tests the same menu may appear on several line items.
///
/// Expected: Ok with two line items for the same menu
#[tokio::test]
async fn accepts_repeated_menu() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let table = factory::create_occupied_table(db).await?;

    let order = OrderService::new(db)
        .create(order_param(
            table.id,
            vec![line_item(menu.id, 1), line_item(menu.id, 3)],
        ))
        .await?;

    assert_eq!(order.order_line_items.len(), 2);
    assert!(order.order_line_items.iter().all(|i| i.menu_id == menu.id));

    Ok(())
}

/// Tests an order without line items is rejected.
///
/// Expected: Err(OrderErr(EmptyLineItems))
#[tokio::test]
async fn rejects_empty_line_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_occupied_table(db).await?;

    let result = OrderService::new(db)
        .create(order_param(table.id, vec![]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::EmptyLineItems))
    ));

    Ok(())
}

/// Tests a line item referencing a missing menu is rejected.
///
/// Expected: Err(OrderErr(MenuNotFound))
#[tokio::test]
async fn rejects_missing_menu() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let table = factory::create_occupied_table(db).await?;

    let result = OrderService::new(db)
        .create(order_param(
            table.id,
            vec![line_item(menu.id, 1), line_item(999, 1)],
        ))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::MenuNotFound))
    ));

    Ok(())
}

/// Tests menus are checked before the order table.
///
/// Expected: Err(OrderErr(MenuNotFound)) even though the table is missing too
#[tokio::test]
async fn checks_menus_before_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db)
        .create(order_param(999, vec![line_item(999, 1)]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::MenuNotFound))
    ));

    Ok(())
}

/// Tests an order on a missing table is rejected.
///
/// Expected: Err(OrderErr(OrderTableNotFound))
#[tokio::test]
async fn rejects_missing_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;

    let result = OrderService::new(db)
        .create(order_param(999, vec![line_item(menu.id, 1)]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::OrderTableNotFound))
    ));

    Ok(())
}

/// Tests an order on an empty table is rejected and nothing is stored.
///
/// Expected: Err(OrderErr(OrderTableEmpty))
#[tokio::test]
async fn rejects_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let table = factory::create_order_table(db).await?;

    let service = OrderService::new(db);
    let result = service
        .create(order_param(table.id, vec![line_item(menu.id, 1)]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::OrderTableEmpty(id))) if id == table.id
    ));
    assert!(service.list().await?.is_empty());

    Ok(())
}

/// Tests zero and negative quantities are rejected.
///
/// Expected: Err(OrderErr(InvalidQuantity)) for each and no order stored
#[tokio::test]
async fn rejects_non_positive_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, menu, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let table = factory::create_occupied_table(db).await?;

    let service = OrderService::new(db);
    for quantity in [0, -1] {
        let result = service
            .create(order_param(
                table.id,
                vec![line_item(menu.id, 1), line_item(menu.id, quantity)],
            ))
            .await;

        assert!(matches!(
            result,
            Err(AppError::OrderErr(OrderError::InvalidQuantity(id))) if id == menu.id
        ));
    }
    assert!(service.list().await?.is_empty());

    Ok(())
}

/// Tests quantities are checked before menus are looked up.
///
/// Expected: Err(OrderErr(InvalidQuantity)) for a missing menu with zero quantity
#[tokio::test]
async fn checks_quantity_before_menus() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_occupied_table(db).await?;

    let result = OrderService::new(db)
        .create(order_param(table.id, vec![line_item(999, 0)]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::InvalidQuantity(999)))
    ));

    Ok(())
}
