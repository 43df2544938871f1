use super::*;

/// Expected: Ok with the new username
#[tokio::test]
async fn updates_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                username: Some("vader".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.username, "vader");

    Ok(())
}

/// Tests that re-submitting the user's own email is not a conflict.
///
/// Expected: Ok
#[tokio::test]
async fn allows_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).email("a@x.com").build().await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                email: Some("a@x.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests taking over another user's email.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn conflicts_on_other_users_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("a@x.com").build().await?;
    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                email: Some("a@x.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update(999_999, UpdateUserParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
