use crate::server::data::user::{UserRecord, UserRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;

fn record(username: &str, email: &str) -> UserRecord {
    UserRecord {
        username: username.to_string(),
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        hash: "hash".to_string(),
    }
}
