use super::*;

/// Tests creating a menu persists its menu products in request order.
///
/// Expected: Ok with menu and two menu product rows
#[tokio::test]
async fn creates_menu_with_menu_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let menu_group = factory::create_menu_group(db).await?;
    let chicken = factory::create_product(db).await?;
    let fries = factory::product::ProductFactory::new(db)
        .price(3_000)
        .build()
        .await?;

    let repo = MenuRepository::new(db);
    let menu = repo
        .create(CreateMenuParam {
            name: "Chicken Set".to_string(),
            price: 18_000,
            menu_group_id: menu_group.id,
            menu_products: vec![
                CreateMenuProductParam {
                    product_id: chicken.id,
                    quantity: 1,
                },
                CreateMenuProductParam {
                    product_id: fries.id,
                    quantity: 2,
                },
            ],
        })
        .await?;

    assert_eq!(menu.name, "Chicken Set");
    assert_eq!(menu.price, 18_000);
    assert_eq!(menu.menu_group_id, menu_group.id);
    assert_eq!(menu.menu_products.len(), 2);
    assert_eq!(menu.menu_products[0].product_id, chicken.id);
    assert_eq!(menu.menu_products[1].product_id, fries.id);
    assert_eq!(menu.menu_products[1].quantity, 2);
    assert!(menu.menu_products.iter().all(|mp| mp.menu_id == menu.id));

    let rows = entity::prelude::MenuProduct::find()
        .filter(entity::menu_product::Column::MenuId.eq(menu.id))
        .all(db)
        .await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests creating a menu without menu products.
///
/// Expected: Ok with an empty menu product list
#[tokio::test]
async fn creates_menu_without_menu_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let menu_group = factory::create_menu_group(db).await?;

    let menu = MenuRepository::new(db)
        .create(CreateMenuParam {
            name: "Water".to_string(),
            price: 0,
            menu_group_id: menu_group.id,
            menu_products: vec![],
        })
        .await?;

    assert!(menu.menu_products.is_empty());

    Ok(())
}
