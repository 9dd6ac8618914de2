// Route exports
pub mod discover;

use actix_web::web;

use crate::services::RankingService;

pub use discover::AppState;

pub fn configure_routes<S: RankingService + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(discover::configure::<S>),
    );
}
