// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Guest side of the wedding RSVP service
//!
//! [`RsvpClient`] talks to the controller, [`FormSession`] drives a single RSVP form from
//! the first keystroke to the final notice.
use reqwest::{Client, Url};

pub mod api;
pub mod session;

pub use api::SubmitParticipant;
pub use session::{FormSession, Notice, SubmitError};

/// The client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Controller URL
    pub controller_url: Url,
}

/// A client of the RSVP controller
///
/// Is used to call the API endpoints on the controller.
#[derive(Debug, Clone)]
pub struct RsvpClient {
    /// Reusable reqwest connection pool
    pub http_client: Client,
    /// Configuration of the client
    pub config: Config,
}

impl RsvpClient {
    pub fn new(config: Config) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}
