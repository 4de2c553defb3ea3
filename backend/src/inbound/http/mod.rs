//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`configure_api`] mounts every `/api` route together with extractor
//! configuration that turns malformed bodies, query strings and paths into
//! validation errors.

use actix_web::web;

pub mod error;
pub mod goals;
pub mod health;
pub mod schemas;
pub mod sessions;
pub mod state;
pub mod stats;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the `/api` scope and its extractor error handlers.
///
/// Handlers expect [`state::HttpState`] in application data.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use practice_tracker::inbound::http::configure_api;
/// use practice_tracker::inbound::http::state::HttpState;
///
/// fn app(state: HttpState) {
///     let _app = App::new()
///         .app_data(web::Data::new(state))
///         .configure(configure_api);
/// }
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(
            web::scope("/api")
                .service(sessions::list_sessions)
                .service(sessions::get_session)
                .service(sessions::create_session)
                .service(sessions::update_session)
                .service(sessions::delete_session)
                .service(goals::get_goals)
                .service(goals::replace_goals)
                .service(stats::get_stats),
        );
}
