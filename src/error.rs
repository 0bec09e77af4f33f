/// The input did not look like an Indian registration number.
#[derive(Debug, Fail)]
#[fail(display = "Invalid format '{}'. Use e.g. MH02FB2727", input)]
pub struct InvalidFormat {
    pub input: String,
}

/// Reasons a live lookup could not produce a record. None of these reach
/// the user; the fetcher logs them and substitutes demo data.
#[derive(Debug, Fail)]
pub enum LookupError {
    #[fail(display = "offline mode requested")]
    Offline,
    #[fail(display = "RAPIDAPI_KEY is not configured")]
    MissingApiKey,
    #[fail(display = "request failed: {}", _0)]
    Http(#[cause] reqwest::Error),
    #[fail(display = "HTTP {}: {}", status, body)]
    Status { status: u16, body: String },
    #[fail(display = "response is not valid JSON: {}", _0)]
    Json(#[cause] serde_json::Error),
    #[fail(display = "API error: {}", _0)]
    Api(String),
    #[fail(display = "unknown response format")]
    UnknownFormat,
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Http(e)
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Json(e)
    }
}
