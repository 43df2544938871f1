use super::*;

/// Expected: Ok(true) then Ok(false) on a second delete
#[tokio::test]
async fn deletes_planet_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    assert!(repo.delete(planet.id).await?);
    assert!(!repo.delete(planet.id).await?);
    assert!(repo.find_by_id(planet.id).await?.is_none());

    Ok(())
}
