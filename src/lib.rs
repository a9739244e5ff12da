//! Single-user web memo pad: an actix-web front end over a diesel/SQLite
//! store, rendered server-side with tera.

use actix_files as fs;
use actix_web::{web, HttpRequest};

pub mod errors;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod store;

use errors::ServerError;

/// Route table shared by the binary and the integration tests. Callers
/// supply `web::Data<MemoStore>` and `web::Data<Tera>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        // textarea submissions can exceed the 16 KiB Form default
        .app_data(web::FormConfig::default().limit(1024 * 1024))
        .route("/", web::get().to(handlers::index))
        .route("/", web::post().to(handlers::create))
        .service(handlers::delete)
        .service(fs::Files::new("/static", "static"))
        .default_service(web::to(handlers::default_handler));
}

// A `/delete/{id}` segment that does not parse as an integer is a 400,
// not the 404 actix answers with by default.
fn path_error_handler(_: actix_web::error::PathError, _: &HttpRequest) -> actix_web::Error {
    ServerError::InvalidMemoId.into()
}
