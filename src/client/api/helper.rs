use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Parse a JSON success body, or turn an error response into an `ApiError`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from(response).await)
    }
}

/// Like `parse_response` for endpoints whose success body carries nothing of interest
/// (`{}` from delete and register).
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

/// Send a request and handle transport errors
pub async fn send_request(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status().as_u16();

    // Read the body once; fall back to the raw text when it is not an ErrorDto.
    let message = match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorDto>(&text) {
            Ok(error_dto) => error_dto.message,
            Err(_) if text.is_empty() => "Unknown error".to_string(),
            Err(_) => text,
        },
        Err(_) => "Unknown error".to_string(),
    };

    ApiError { status, message }
}
