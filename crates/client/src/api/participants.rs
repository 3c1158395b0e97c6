// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use super::{parse_json_response, Result};
use crate::RsvpClient;
use async_trait::async_trait;
use serde::Deserialize;
use types::rsvp::RsvpForm;

/// Response of a stored participant
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct Added {
    pub status: u16,
}

/// Anything that accepts a participant's form
#[async_trait]
pub trait SubmitParticipant: Send + Sync {
    async fn submit_participant(&self, form: &RsvpForm) -> Result<()>;
}

impl RsvpClient {
    /// Calls *POST '/api/addParticipant'*
    pub async fn add_participant(&self, form: &RsvpForm) -> Result<Added> {
        let response = self.post_json("api/addParticipant", form).await?;

        parse_json_response(response).await
    }
}

#[async_trait]
impl SubmitParticipant for RsvpClient {
    async fn submit_participant(&self, form: &RsvpForm) -> Result<()> {
        self.add_participant(form).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::Config;
    use actix_web::{web, HttpResponse};
    use reqwest::{StatusCode, Url};
    use test_util::{assert_eq, complete_form, TestServer};

    async fn accept(form: web::Json<RsvpForm>) -> HttpResponse {
        if form.first_name.as_deref() == Some("Jana") {
            HttpResponse::Ok()
                .content_type("application/json")
                .body(r#"{"status":200}"#)
        } else {
            HttpResponse::BadRequest().finish()
        }
    }

    async fn reject() -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("application/json")
            .body(r#"{"code":"missing_database","message":"DatabaseId is not defined."}"#)
    }

    fn client(server: &TestServer) -> RsvpClient {
        RsvpClient::new(Config {
            controller_url: Url::parse(&server.url()).unwrap(),
        })
    }

    #[actix_rt::test]
    async fn add_participant() {
        let server = TestServer::start(|cfg| {
            cfg.route("/api/addParticipant", web::post().to(accept));
        });

        let added = client(&server)
            .add_participant(&complete_form())
            .await
            .unwrap();

        assert_eq!(added, Added { status: 200 });

        server.stop().await;
    }

    #[actix_rt::test]
    async fn failed_participant_is_non_success() {
        let server = TestServer::start(|cfg| {
            cfg.route("/api/addParticipant", web::post().to(reject));
        });

        let err = client(&server)
            .submit_participant(&complete_form())
            .await
            .unwrap_err();

        match err {
            ApiError::NonSuccess(error) => {
                assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(error.reason.contains("DatabaseId is not defined."));
            }
            other => panic!("Expected a non-success error, got {other:?}"),
        }

        server.stop().await;
    }
}
