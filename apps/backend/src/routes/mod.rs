use actix_web::web;

use crate::middleware::jwt_extract::JwtExtract;

pub mod auth;
pub mod documents;
pub mod search;

/// Register every route.
///
/// `POST /login` is open; `/documents/**` and `/search/**` sit behind the
/// access gate. `main` and the integration tests share this wiring.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure_routes);

    cfg.service(
        web::scope("/documents")
            .wrap(JwtExtract)
            .configure(documents::configure_routes),
    );

    cfg.service(
        web::scope("/search")
            .wrap(JwtExtract)
            .configure(search::configure_routes),
    );
}
