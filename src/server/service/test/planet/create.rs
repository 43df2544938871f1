use super::*;

/// Tests creating a planet whose name is already taken.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn conflicts_on_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlanetFactory::new(db).name("Tatooine").build().await?;

    let result = PlanetService::new(db)
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlanetService::new(db)
        .create(CreatePlanetParam {
            name: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
