use super::*;

/// Expected: Ok with only the user's favorites, ordered by ID
#[tokio::test]
async fn lists_favorites_of_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_favorite(db, user.id).await?;
    factory::create_favorite(db, other.id).await?;
    let second = factory::create_favorite(db, user.id).await?;

    let service = FavoriteService::new(db, FavoriteScope::Global);

    let ids: Vec<i32> = service
        .get_by_user(user.id)
        .await?
        .iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    assert_eq!(service.get_all().await?.len(), 3);

    Ok(())
}

/// Expected: Err(NotFound) for an unknown user, Ok(empty) for a user without favorites
#[tokio::test]
async fn requires_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = FavoriteService::new(db, FavoriteScope::Global);

    assert!(service.get_by_user(user.id).await?.is_empty());
    assert!(matches!(
        service.get_by_user(999_999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
