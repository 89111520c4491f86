//! HTTP handlers and route configuration.

mod blogs;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Largest urlencoded form body accepted on create and update.
pub const FORM_LIMIT: usize = 100 * 1024;

/// Configure all application routes.
///
/// ```text
/// GET    /                 -> redirect /blogs
/// GET    /blogs            -> listing
/// GET    /blogs/new        -> creation form
/// POST   /blogs            -> create
/// GET    /blogs/{id}       -> detail
/// GET    /blogs/{id}/edit  -> edit form
/// PUT    /blogs/{id}       -> update
/// DELETE /blogs/{id}       -> delete
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(FORM_LIMIT))
        .route("/", web::get().to(blogs::root))
        .service(
            web::scope("/blogs")
                .service(
                    web::resource("")
                        .route(web::get().to(blogs::index))
                        .route(web::post().to(blogs::create)),
                )
                .service(web::resource("/new").route(web::get().to(blogs::new_form)))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(blogs::show))
                        .route(web::put().to(blogs::update))
                        .route(web::delete().to(blogs::destroy)),
                )
                .service(web::resource("/{id}/edit").route(web::get().to(blogs::edit))),
        );
}
