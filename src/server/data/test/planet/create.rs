use super::*;

/// Tests creating a planet and finding it by name.
///
/// Expected: Ok with the planet retrievable by its name
#[tokio::test]
async fn creates_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
        })
        .await?;

    assert_eq!(planet.name, "Tatooine");

    let found = repo.find_by_name("Tatooine").await?;
    assert_eq!(found, Some(planet));
    assert!(repo.find_by_name("Hoth").await?.is_none());

    Ok(())
}

/// Expected: Ok with planets in insertion order
#[tokio::test]
async fn lists_planets_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;

    let planets = PlanetRepository::new(db).get_all().await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
