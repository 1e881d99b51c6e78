use axum::Json;
use serde::{Deserialize, Serialize};

use crate::authentication::AuthenticatedUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct GetDataResult {
    #[serde(rename = "userName")]
    pub user_name: String,
}

/// The protected endpoint: answers with the authenticated username.
///
/// The `AuthenticatedUser` guard runs the credential check before this body
/// executes; a request that fails it is answered with the 401 challenge and
/// never gets here.
///
/// # Arguments
/// * `username` - The validated username carried in by the guard
///
/// # Returns
/// * `Json<GetDataResult>` - The username as structured payload
pub async fn get_data(AuthenticatedUser(username): AuthenticatedUser) -> Json<GetDataResult> {
    Json(GetDataResult { user_name: username })
}
