use serde::{Deserialize, Serialize};

/// Body of `POST /shorten`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenRequest {
    pub original_url: String,
}

/// Reply to `POST /shorten`. Carries the bare 6-character code.
#[derive(Debug, Clone, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

/// One row of the `/metrics` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainStat {
    pub domain: String,
    pub count: u64,
}
