use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto},
        book::{BookDto, BookFieldsDto, BookType},
        company::{CompanyDto, CompanyFieldsDto},
        creator::{CreatorDto, CreatorFieldsDto},
        disc::{DiscDto, DiscFieldsDto, DiscFormat},
        game::{GameDto, GameFieldsDto},
        item::{ItemDto, ItemFieldsDto},
        series::{SeriesDto, SeriesFieldsDto},
        user::{AuthenticateDto, AuthenticatedUserDto, UserDto, UserFieldsDto},
    },
    server::controller::user,
};

/// OpenAPI document for the user endpoints and every DTO schema.
///
/// The catalog handlers are generic and carry no path annotations; their request and
/// response bodies are described by the schemas listed here.
#[derive(OpenApi)]
#[openapi(
    paths(
        user::register,
        user::authenticate,
        user::get_all,
        user::get_current,
        user::get_by_id,
        user::update,
        user::delete,
    ),
    components(schemas(
        ErrorDto,
        EmptyDto,
        UserDto,
        UserFieldsDto,
        AuthenticateDto,
        AuthenticatedUserDto,
        SeriesDto,
        SeriesFieldsDto,
        CompanyDto,
        CompanyFieldsDto,
        CreatorDto,
        CreatorFieldsDto,
        ItemDto,
        ItemFieldsDto,
        BookDto,
        BookFieldsDto,
        BookType,
        DiscDto,
        DiscFieldsDto,
        DiscFormat,
        GameDto,
        GameFieldsDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "user", description = "Registration, login and account management")
    ),
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// GET /api/openapi.json
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
