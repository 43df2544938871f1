use super::*;

/// Expected: Ok for an existing character, Err(NotFound) otherwise
#[tokio::test]
async fn gets_character_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let service = CharacterService::new(db);

    let found = service.get_by_id(character.id).await?;
    assert_eq!(found.name, character.name);
    assert_eq!(found.last_name, character.last_name);
    assert!(matches!(
        service.get_by_id(999_999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
