use super::*;

/// Tests adding a planet for a user without any favorite yet.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_user_without_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let result = FavoriteService::new(db, FavoriteScope::Global)
        .add_planet(user.id, planet.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests adding a planet that another user's favorite already holds.
///
/// Expected: Err(Conflict) regardless of which user owns the row
#[tokio::test]
async fn conflicts_on_planet_held_by_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    FavoriteFactory::new(db, owner.id)
        .planet_id(planet.id)
        .build()
        .await?;
    factory::create_favorite(db, user.id).await?;

    let result = FavoriteService::new(db, FavoriteScope::Global)
        .add_planet(user.id, planet.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the user scope letting two users favorite the same planet.
///
/// Expected: Ok, then Err(Conflict) when the same user repeats it
#[tokio::test]
async fn user_scope_only_checks_own_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    FavoriteFactory::new(db, owner.id)
        .planet_id(planet.id)
        .build()
        .await?;
    factory::create_favorite(db, user.id).await?;

    let service = FavoriteService::new(db, FavoriteScope::User);

    let favorite = service.add_planet(user.id, planet.id).await?;
    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.planet_id, Some(planet.id));
    assert_eq!(favorite.character_id, None);

    let repeated = service.add_planet(user.id, planet.id).await;
    assert!(matches!(repeated, Err(AppError::Conflict(_))));

    Ok(())
}

/// Expected: Err(NotFound) for a planet that does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id).await?;

    let result = FavoriteService::new(db, FavoriteScope::Global)
        .add_planet(user.id, 999_999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
