mod errors;
mod handlers;
mod serve;
mod state;

use axum::{Router, routing::get};

pub use errors::HttpError;
pub use serve::{Bound, bind, serve};
pub use state::HttpState;

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/heatmap", get(handlers::heatmap_svg))
        .route("/layout", get(handlers::heatmap_layout));

    Router::new()
        .nest("/api", api)
        .route("/data.json", get(handlers::data_json))
        .fallback(handlers::not_found)
        .with_state(state)
}
