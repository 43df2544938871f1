//! Domain & parameter models for favorite operations
//!
//! Defines the favorite domain model, the filter used for field-based lookups, the
//! uniqueness scope, and the decision table that drives `FavoriteService::add`.

use std::str::FromStr;

use sea_orm::{ColumnTrait, Condition};

use crate::model::favorite::{AddFavoriteDto, FavoriteDto};

/// Association between a user and an optional planet and/or character.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl Favorite {
    /// Converts an entity model to the favorite domain model
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            planet_id: entity.planet_id,
            character_id: entity.character_id,
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            id_user: self.user_id,
            id_planets: self.planet_id,
            id_characters: self.character_id,
        }
    }
}

/// Parameters for inserting a favorite row
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFavoriteParam {
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

/// Parameters for `FavoriteService::add`
///
/// The user is required; planet and character are each optional.
#[derive(Debug, Clone, PartialEq)]
pub struct AddFavoriteParam {
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl From<AddFavoriteDto> for AddFavoriteParam {
    fn from(dto: AddFavoriteDto) -> Self {
        Self {
            user_id: dto.id_user,
            planet_id: dto.id_planets,
            character_id: dto.id_characters,
        }
    }
}

impl From<AddFavoriteParam> for CreateFavoriteParam {
    fn from(param: AddFavoriteParam) -> Self {
        Self {
            user_id: param.user_id,
            planet_id: param.planet_id,
            character_id: param.character_id,
        }
    }
}

/// Field filter for favorite lookups. Unset fields are not constrained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FavoriteFilter {
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl FavoriteFilter {
    pub fn user(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn planet(mut self, planet_id: i32) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    pub fn character(mut self, character_id: i32) -> Self {
        self.character_id = Some(character_id);
        self
    }

    /// Builds the SQL condition matching every set field.
    pub fn condition(&self) -> Condition {
        use entity::favorite::Column;

        Condition::all()
            .add_option(self.user_id.map(|id| Column::UserId.eq(id)))
            .add_option(self.planet_id.map(|id| Column::PlanetId.eq(id)))
            .add_option(self.character_id.map(|id| Column::CharacterId.eq(id)))
    }
}

/// Which favorite rows count when checking whether a planet or character is already taken.
///
/// `Global` considers every user's favorites, so a planet can be favorited by one user at
/// most. `User` only considers the requesting user's favorites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavoriteScope {
    #[default]
    Global,
    User,
}

impl FavoriteScope {
    /// Base filter for holder lookups performed on behalf of `user_id`.
    pub fn filter_for(self, user_id: i32) -> FavoriteFilter {
        match self {
            FavoriteScope::Global => FavoriteFilter::default(),
            FavoriteScope::User => FavoriteFilter::default().user(user_id),
        }
    }
}

impl FromStr for FavoriteScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(FavoriteScope::Global),
            "user" => Ok(FavoriteScope::User),
            other => Err(format!("unknown favorite scope '{}'", other)),
        }
    }
}

/// State of one optional reference of an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteSlot {
    /// The request did not supply this reference.
    Omitted,
    /// Supplied id that no favorite row in scope holds yet.
    Free(i32),
    /// Supplied id already held by the favorite with this id.
    HeldBy(i32),
}

impl FavoriteSlot {
    /// Builds a slot from the requested id and the first favorite in scope holding it.
    pub fn resolve(requested: Option<i32>, holder: Option<&Favorite>) -> Self {
        match (requested, holder) {
            (None, _) => FavoriteSlot::Omitted,
            (Some(_), Some(favorite)) => FavoriteSlot::HeldBy(favorite.id),
            (Some(id), None) => FavoriteSlot::Free(id),
        }
    }
}

/// Action chosen for an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    /// Insert a new row with the supplied combination.
    Create,
    /// Point the planet of an existing row (the one holding the character) at `planet_id`.
    AttachPlanet { favorite_id: i32, planet_id: i32 },
    /// The relationship already exists.
    Reject,
}

impl FavoriteAction {
    /// Decision table for adding a favorite.
    ///
    /// | user has favorites | planet  | character | action       |
    /// |--------------------|---------|-----------|--------------|
    /// | no                 | any     | any       | Create       |
    /// | yes                | HeldBy  | any       | Reject       |
    /// | yes                | Free    | HeldBy    | AttachPlanet |
    /// | yes                | Omitted | HeldBy    | Reject       |
    /// | yes                | other   | other     | Create       |
    pub fn decide(
        user_has_favorites: bool,
        planet: FavoriteSlot,
        character: FavoriteSlot,
    ) -> Self {
        use FavoriteSlot::*;

        if !user_has_favorites {
            return FavoriteAction::Create;
        }

        match (planet, character) {
            (HeldBy(_), _) => FavoriteAction::Reject,
            (Free(planet_id), HeldBy(favorite_id)) => FavoriteAction::AttachPlanet {
                favorite_id,
                planet_id,
            },
            (Omitted, HeldBy(_)) => FavoriteAction::Reject,
            (Free(_) | Omitted, Free(_) | Omitted) => FavoriteAction::Create,
        }
    }
}

/// Result of a successful add request.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteOutcome {
    Created(Favorite),
    Updated(Favorite),
}

impl FavoriteOutcome {
    pub fn favorite(&self) -> &Favorite {
        match self {
            FavoriteOutcome::Created(favorite) | FavoriteOutcome::Updated(favorite) => favorite,
        }
    }
}
