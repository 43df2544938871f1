use super::*;

/// Tests removing the row linking a user to a character.
///
/// Expected: Ok, the row is deleted
#[tokio::test]
async fn deletes_matching_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _planet, character, favorite) =
        factory::helpers::create_favorite_with_dependencies(db).await?;

    let removed = FavoriteService::new(db, FavoriteScope::Global)
        .remove_character(user.id, character.id)
        .await?;

    assert_eq!(removed.id, favorite.id);
    assert!(
        !FavoriteRepository::new(db)
            .exists(FavoriteFilter::default().character(character.id))
            .await?
    );

    Ok(())
}

/// Tests a user without favorite rows, then a character without favorite rows.
///
/// Expected: Err(NotFound) in both cases
#[tokio::test]
async fn fails_when_either_side_has_no_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let service = FavoriteService::new(db, FavoriteScope::Global);

    let result = service.remove_character(user.id, character.id).await;
    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found"));

    factory::create_favorite(db, user.id).await?;

    let result = service.remove_character(user.id, character.id).await;
    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Character not found"));

    Ok(())
}

/// Tests a user and a character that both have favorites, but never on the same row.
///
/// Expected: Err(InternalError) and nothing deleted
#[tokio::test]
async fn fails_when_no_row_links_both() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    factory::create_favorite(db, user.id).await?;
    FavoriteFactory::new(db, owner.id)
        .character_id(character.id)
        .build()
        .await?;

    let result = FavoriteService::new(db, FavoriteScope::Global)
        .remove_character(user.id, character.id)
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
    assert_eq!(FavoriteRepository::new(db).get_all().await?.len(), 2);

    Ok(())
}
