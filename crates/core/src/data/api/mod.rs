use std::sync::Arc;

use axum::{routing::get, Router};

use crate::app_state::AppState;

mod get_data;

pub use get_data::GetDataResult;

use get_data::get_data;

pub fn create_data_routes() -> Router<Arc<AppState>> {
    Router::new().route("/data", get(get_data))
}
