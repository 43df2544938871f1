use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the user is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(999_999).await?;

    assert!(!deleted);

    Ok(())
}
