use super::*;

/// Expected: Ok with the new name, Err(NotFound) for an unknown ID
#[tokio::test]
async fn renames_existing_character_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = CharacterFactory::new(db).name("Ben").build().await?;

    let service = CharacterService::new(db);
    let updated = service
        .update(
            character.id,
            UpdateCharacterParam {
                name: Some("Obi-Wan".to_string()),
                last_name: Some("Kenobi".to_string()),
            },
        )
        .await?;
    assert_eq!(updated.name, "Obi-Wan");
    assert_eq!(updated.last_name, "Kenobi");

    let missing = service
        .update(
            999_999,
            UpdateCharacterParam {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests renaming a character onto another character's name.
///
/// Expected: Err(Conflict), while keeping its own name is allowed
#[tokio::test]
async fn conflicts_on_other_characters_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Luke").build().await?;
    let character = CharacterFactory::new(db).name("Leia").build().await?;

    let service = CharacterService::new(db);

    let result = service
        .update(
            character.id,
            UpdateCharacterParam {
                name: Some("Luke".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let unchanged = service
        .update(
            character.id,
            UpdateCharacterParam {
                name: Some("Leia".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(unchanged.name, "Leia");

    Ok(())
}
