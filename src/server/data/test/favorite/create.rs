use super::*;

/// Tests creating a favorite that references only the user.
///
/// Expected: Ok with planet and character unset
#[tokio::test]
async fn creates_user_only_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(CreateFavoriteParam {
            user_id: user.id,
            planet_id: None,
            character_id: None,
        })
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.planet_id, None);
    assert_eq!(favorite.character_id, None);

    Ok(())
}

/// Tests creating a favorite with every reference set.
///
/// Expected: Ok and the row is returned by find_by_id and get_by_user_id
#[tokio::test]
async fn creates_full_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(CreateFavoriteParam {
            user_id: user.id,
            planet_id: Some(planet.id),
            character_id: Some(character.id),
        })
        .await?;

    assert_eq!(repo.find_by_id(favorite.id).await?, Some(favorite.clone()));
    assert_eq!(repo.get_by_user_id(user.id).await?, vec![favorite]);

    Ok(())
}

/// Tests that the foreign key on user_id rejects an unknown user.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteRepository::new(db)
        .create(CreateFavoriteParam {
            user_id: 999_999,
            planet_id: None,
            character_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
