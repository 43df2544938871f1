use super::*;

/// Tests that deleting a character removes the favorites referencing it.
///
/// Expected: Ok and the character is gone along with its favorites
#[tokio::test]
async fn cascades_to_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _planet, character, favorite) =
        factory::helpers::create_favorite_with_dependencies(db).await?;

    let service = CharacterService::new(db);
    service.delete(character.id).await?;

    let repo = FavoriteRepository::new(db);
    assert!(
        !repo
            .exists(FavoriteFilter::default().character(character.id))
            .await?
    );
    assert!(repo.find_by_id(favorite.id).await?.is_none());
    assert!(matches!(
        service.get_by_id(character.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
