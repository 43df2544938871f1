use super::*;

use test_utils::factory::{
    character::CharacterFactory, planet::PlanetFactory, user::UserFactory,
};

/// Walks through a user favoriting Tatooine and Luke, then trying to claim a character
/// another user already favorited.
///
/// Expected: one row with all three ids, then Err(Conflict)
#[tokio::test]
async fn tatooine_and_luke() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).email("a@x.com").build().await?;
    let planet = PlanetFactory::new(db).name("Tatooine").build().await?;
    let luke = CharacterFactory::new(db).name("Luke").build().await?;

    let service = FavoriteService::new(db, FavoriteScope::Global);

    service
        .add(add_param(user.id, Some(planet.id), Some(luke.id)))
        .await?;

    let rows = service.get_by_user(user.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].planet_id, Some(planet.id));
    assert_eq!(rows[0].character_id, Some(luke.id));

    let han = CharacterFactory::new(db).name("Han").build().await?;
    let other = factory::create_user(db).await?;
    FavoriteFactory::new(db, other.id)
        .character_id(han.id)
        .build()
        .await?;

    let result = service.add_character(user.id, han.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
