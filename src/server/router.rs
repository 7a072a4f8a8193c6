use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    model::catalog::CatalogKind,
    server::{
        controller::{catalog::catalog_routes, docs::openapi, user::user_routes},
        model::{
            book::Book, company::Company, creator::Creator, disc::Disc, game::Game,
            series::Series,
        },
        state::AppState,
    },
};

/// Builds the full API router.
///
/// Each catalog kind is served under its collection path, e.g. `/companies/{id}`.
pub fn router() -> Router<AppState> {
    let mut router = Router::new()
        .route("/api/openapi.json", get(openapi))
        .merge(user_routes());

    for kind in CatalogKind::ALL {
        router = router.merge(routes_for(kind));
    }

    router.layer(CorsLayer::permissive())
}

fn routes_for(kind: CatalogKind) -> Router<AppState> {
    match kind {
        CatalogKind::Series => catalog_routes::<Series>(),
        CatalogKind::Company => catalog_routes::<Company>(),
        CatalogKind::Creator => catalog_routes::<Creator>(),
        CatalogKind::Book => catalog_routes::<Book>(),
        CatalogKind::Disc => catalog_routes::<Disc>(),
        CatalogKind::Game => catalog_routes::<Game>(),
    }
}
