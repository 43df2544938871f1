use crate::server::{
    data::favorite::FavoriteRepository,
    error::AppError,
    model::{
        favorite::FavoriteFilter,
        planet::{CreatePlanetParam, UpdatePlanetParam},
    },
    service::planet::PlanetService,
};
use test_utils::{builder::TestBuilder, factory, factory::planet::PlanetFactory};

mod create;
