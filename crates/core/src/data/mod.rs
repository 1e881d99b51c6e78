mod api;
pub use api::{create_data_routes, GetDataResult};
