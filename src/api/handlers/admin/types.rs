//! Request/response types for admin endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct VerifyPathRequest {
    pub candidate: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct VerifyPathResponse {
    pub valid: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub id_token: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub email: String,
}
