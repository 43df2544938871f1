use super::*;

/// Expected: Ok for an existing user, Err(NotFound) otherwise
#[tokio::test]
async fn gets_user_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);

    assert_eq!(service.get_by_id(user.id).await?.id, user.id);
    assert!(matches!(
        service.get_by_id(999_999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
