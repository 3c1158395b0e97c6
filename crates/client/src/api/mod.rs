// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::RsvpClient;
use reqwest::{Error, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

mod participants;

pub use participants::{Added, SubmitParticipant};

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub struct HttpError {
    /// Response status code
    pub status: StatusCode,
    /// Response body
    pub reason: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(error {}: {})", self.status, self.reason)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// URL parsing error
    #[error("Url error: {0}")]
    InvalidUrl(String),
    /// Reqwest error
    #[error("Reqwest error: {0}")]
    ReqwestError(String),
    /// A Non-200 HTTP response
    #[error("Http error: {0}")]
    NonSuccess(HttpError),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: Error) -> Self {
        Self::ReqwestError(e.to_string())
    }
}

pub(crate) async fn parse_json_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(ApiError::NonSuccess(HttpError {
            status: response.status(),
            reason: response.text().await?,
        }));
    }
    Ok(response.json::<T>().await?)
}

impl RsvpClient {
    fn url(&self, path: &str) -> Result<Url> {
        self.config
            .controller_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    async fn post_json<T>(&self, path: &str, data: &T) -> Result<Response>
    where
        T: Serialize,
    {
        let url = self.url(path)?;
        let response = self.http_client.post(url).json(data).send().await?;

        Ok(response)
    }
}
