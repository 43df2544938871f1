use crate::server::{
    data::planet::PlanetRepository,
    model::planet::{CreatePlanetParam, UpdatePlanetParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
