use super::*;

/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(create_param("a@x.com", "luke"))
        .await?;

    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.username, "luke");

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Expected: Err(Conflict) and no second row
#[tokio::test]
async fn conflicts_on_existing_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("a@x.com").build().await?;

    let service = UserService::new(db);
    let result = service.create(create_param("a@x.com", "someone")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Expected: Err(Conflict)
#[tokio::test]
async fn conflicts_on_existing_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("luke").build().await?;

    let result = UserService::new(db)
        .create(create_param("new@x.com", "luke"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that whitespace-only required fields are rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).create(create_param("  ", "luke")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
