use crate::server::{data::series::SeriesRepository, model::series::SeriesParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;

fn params(name: &str) -> SeriesParams {
    SeriesParams {
        name: name.to_string(),
        items: Vec::new(),
    }
}
