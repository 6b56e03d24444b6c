use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub links: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
