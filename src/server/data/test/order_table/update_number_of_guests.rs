use super::*;

/// Tests the number of guests is updated without touching other fields.
///
/// Expected: Ok with 4 guests and the table still occupied
#[tokio::test]
async fn updates_number_of_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_occupied_table(db).await?;

    let updated = OrderTableRepository::new(db)
        .update_number_of_guests(table.id, 4)
        .await?;

    assert_eq!(updated.id, table.id);
    assert_eq!(updated.number_of_guests, 4);
    assert!(!updated.empty);

    Ok(())
}
