use super::*;

/// Tests creating a character and finding it by name.
///
/// Expected: Ok with both names stored
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParam {
            name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
        })
        .await?;

    assert_eq!(character.name, "Luke");
    assert_eq!(character.last_name, "Skywalker");

    let found = repo.find_by_name("Luke").await?;
    assert_eq!(found.map(|c| c.id), Some(character.id));

    Ok(())
}
