use super::*;

/// Tests every menu is listed with its menu products.
///
/// Expected: Ok with both menus in insertion order
#[tokio::test]
async fn lists_menus_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, first, _) = factory::helpers::create_menu_with_dependencies(db).await?;
    let second = factory::create_menu(db, first.menu_group_id).await?;
    factory::create_menu_product(db, second.id, product.id, 2).await?;

    let menus = MenuService::new(db).list().await?;

    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0].id, first.id);
    assert_eq!(menus[1].id, second.id);
    assert_eq!(menus[1].menu_products[0].quantity, 2);

    Ok(())
}
