use super::*;

/// Expected: Ok for a new name, Err(Conflict) for a taken one
#[tokio::test]
async fn conflicts_on_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Luke").build().await?;

    let service = CharacterService::new(db);

    let created = service
        .create(CreateCharacterParam {
            name: "Leia".to_string(),
            last_name: "Organa".to_string(),
        })
        .await?;
    assert_eq!(created.last_name, "Organa");

    let result = service
        .create(CreateCharacterParam {
            name: "Luke".to_string(),
            last_name: "Lars".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
