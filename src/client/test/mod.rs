use chrono::{TimeZone, Utc};

use crate::{
    client::model::error::ApiError,
    model::{
        book::{BookDto, BookType},
        disc::{DiscDto, DiscFormat},
        game::GameDto,
        item::ItemDto,
        series::SeriesDto,
        user::UserDto,
    },
};

mod view;

fn series(id: i32, name: &str) -> SeriesDto {
    SeriesDto {
        id,
        name: name.to_string(),
        items: Vec::new(),
    }
}

fn item(title: &str, series: Option<&str>) -> ItemDto {
    ItemDto {
        title: title.to_string(),
        physical: true,
        digital: false,
        publisher: "Test Publisher".to_string(),
        list_price: None,
        image: None,
        location: None,
        checked_out: false,
        checked_out_by: None,
        series: series.map(str::to_string),
    }
}

fn book(id: i32, title: &str, series: Option<&str>) -> BookDto {
    BookDto {
        id,
        item: item(title, series),
        authors: vec!["Test Author".to_string()],
        language: None,
        book_type: BookType::Novel,
        volume: None,
        isbn: None,
    }
}

fn disc(id: i32, title: &str, series: Option<&str>) -> DiscDto {
    DiscDto {
        id,
        item: item(title, series),
        format: vec![DiscFormat::BluRay],
        languages: Vec::new(),
        subtitles: Vec::new(),
        volume: None,
        director: None,
        studio: None,
        is_collection: false,
    }
}

fn game(id: i32, title: &str, series: Option<&str>) -> GameDto {
    GameDto {
        id,
        item: item(title, series),
        platforms: vec!["PC".to_string()],
        languages: Vec::new(),
        multiplayer: false,
        genre: None,
    }
}

fn user(id: i32, username: &str) -> UserDto {
    UserDto {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn api_error(status: u16, message: &str) -> ApiError {
    ApiError {
        status,
        message: message.to_string(),
    }
}
