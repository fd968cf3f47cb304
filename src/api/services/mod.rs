pub mod admin;
pub mod health;
pub mod interact;
pub mod submit;

pub use admin::AdminService;
pub use health::{AppStartTime, HealthService};
pub use interact::InteractService;
pub use submit::SubmitService;

/// Public tracking endpoints: unauthenticated by design, the token is the
/// only credential a request carries.
pub fn tracking_routes() -> actix_web::Scope {
    use actix_web::web;

    web::scope("/api")
        .route("/interact", web::get().to(InteractService::handle_interact))
        .route("/submit-data", web::post().to(SubmitService::handle_submit))
}
