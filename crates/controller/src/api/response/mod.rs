// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Response types of the HTTP API
use actix_web::http::StatusCode;
use serde::Serialize;

mod error;

pub use error::ApiError;

/// Body of a successful write, mirrors the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBody {
    pub status: u16,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
        }
    }
}
