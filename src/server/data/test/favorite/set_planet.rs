use super::*;

/// Tests pointing an existing favorite at another planet.
///
/// Expected: Ok with the new planet and the character untouched
#[tokio::test]
async fn replaces_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _planet, character, favorite) =
        factory::helpers::create_favorite_with_dependencies(db).await?;
    let other = factory::create_planet(db).await?;

    let updated = FavoriteRepository::new(db)
        .set_planet(favorite.id, other.id)
        .await?;

    assert_eq!(updated.id, favorite.id);
    assert_eq!(updated.planet_id, Some(other.id));
    assert_eq!(updated.character_id, Some(character.id));

    Ok(())
}

/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let result = FavoriteRepository::new(db)
        .set_planet(999_999, planet.id)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
