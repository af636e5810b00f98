use super::*;

/// Tests a product with a non-negative price is created and listed.
///
/// Expected: Ok with the product listed
#[tokio::test]
async fn creates_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    let product = service
        .create(CreateProductParam {
            name: "Fried Chicken".to_string(),
            price: 16_000,
        })
        .await?;
    let free = service
        .create(CreateProductParam {
            name: "Pickles".to_string(),
            price: 0,
        })
        .await?;

    assert_eq!(product.price, 16_000);
    assert_eq!(service.list().await?, vec![product, free]);

    Ok(())
}

/// Tests a negative price is rejected and nothing is stored.
///
/// Expected: Err(ProductErr(InvalidPrice))
#[tokio::test]
async fn rejects_negative_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    let result = service
        .create(CreateProductParam {
            name: "Fried Chicken".to_string(),
            price: -1,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProductErr(ProductError::InvalidPrice))
    ));
    assert!(service.list().await?.is_empty());

    Ok(())
}

/// Tests products are listed in the order they were stored.
///
/// Expected: Ok with ids in insertion order
#[tokio::test]
async fn lists_products_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::product::ProductFactory::new(db)
        .name("Seasoned Chicken")
        .price(17_000)
        .build()
        .await?;
    let second = factory::create_product(db).await?;
    let third = factory::product::ProductFactory::new(db)
        .name("Cola")
        .price(1_500)
        .build()
        .await?;

    let ids: Vec<i32> = ProductService::new(db)
        .list()
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
