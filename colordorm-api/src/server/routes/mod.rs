use crate::server::ServerRouter;
use axum::Router;

mod index;
mod posts;
mod users;

pub fn routes() -> ServerRouter {
    Router::new()
        .merge(index::routes())
        .merge(posts::routes())
        .merge(users::routes())
}
