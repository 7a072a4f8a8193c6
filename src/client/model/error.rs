/// Error surfaced by the API client and stored in the failing store slice.
///
/// `status` is the HTTP status of the response, or 500 when the request never produced one
/// (connection failure, undecodable body).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
