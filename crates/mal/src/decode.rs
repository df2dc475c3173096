//! Decoding of Jikan v4 response bodies.
//!
//! Every Jikan payload wraps its content in a `data` envelope. Failures are
//! reported with the JSON path of the offending field.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::SourceError;
use crate::models::{AnimeRecord, ImageSet};

const TOO_MANY_REQUESTS: u16 = 429;
const NOT_FOUND: u16 = 404;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Unwrap the `data` envelope of a successful response body.
pub fn data<T: DeserializeOwned>(body: &str) -> crate::Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize::<_, Envelope<T>>(deserializer)
        .map(|envelope| envelope.data)
        .map_err(|e| SourceError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
}

/// Turn a status code and body into a decoded payload, mapping non-success
/// statuses to errors.
pub fn response<T: DeserializeOwned>(status_code: u16, body: &str) -> crate::Result<T> {
    match status_code {
        200..=299 => data(body),
        TOO_MANY_REQUESTS => Err(SourceError::RateLimited),
        _ => Err(SourceError::Api {
            status_code,
            message: body.to_string(),
        }),
    }
}

/// Body of GET /anime/{id}. A 404 means the id is unknown.
pub fn anime(status_code: u16, body: &str) -> crate::Result<Option<AnimeRecord>> {
    if status_code == NOT_FOUND {
        return Ok(None);
    }
    response(status_code, body).map(Some)
}

/// Body of GET /anime?q=
pub fn search(status_code: u16, body: &str) -> crate::Result<Vec<AnimeRecord>> {
    response(status_code, body)
}

/// Body of GET /anime/{id}/pictures
pub fn pictures(status_code: u16, body: &str) -> crate::Result<Vec<ImageSet>> {
    if status_code == NOT_FOUND {
        return Ok(vec![]);
    }
    response(status_code, body)
}
