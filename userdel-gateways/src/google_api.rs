use anyhow::{anyhow, Result};
use reqwest::{blocking::Response, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

/// Error object returned by Google REST APIs.
#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    pub message: String,
}

/// Extracts the error object of a failed API call.
///
/// Falls back to the HTTP status if the body cannot be parsed.
pub fn api_error(response: Response) -> ApiError {
    let code = response.status().as_u16();
    match response.json::<ErrorResponse>() {
        Ok(ErrorResponse { error }) => error,
        Err(err) => {
            debug!("Unable to parse API error response: {err}");
            ApiError {
                code,
                message: format!("unexpected HTTP status {code}"),
            }
        }
    }
}

pub fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Invalid API base URL: {base_url}"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
