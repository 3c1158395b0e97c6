// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Registration of wedding participants
use super::response::{ApiError, StatusBody};
use crate::mapper;
use crate::reporting::{ErrorReport, ErrorReporter};
use crate::settings::ErrorReporting;
use crate::store::{RecordStore, StoreError};
use actix_web::web::{Bytes, Data, Json};
use actix_web::{post, HttpRequest};
use serde_json::Value;
use types::rsvp::RsvpForm;

const EMPTY_BODY: &str = "The body of the request is empty.";

/// API Endpoint *POST /api/addParticipant*
///
/// Validates the submitted RSVP form and stores it as a new record.
///
/// The body is read as is, without looking at the content type, since browsers send the
/// form as plain text. A JSON string that itself contains the form is accepted as well.
///
/// Returns `200 {"status": 200}` on success, `422` with the invalid fields if the form is
/// invalid and `500` for everything else. Every `500` is handed to the [`ErrorReporter`].
#[post("/addParticipant")]
pub async fn add_participant(
    request: HttpRequest,
    body: Bytes,
    store: Data<dyn RecordStore>,
    reporter: Data<dyn ErrorReporter>,
    reporting: Data<ErrorReporting>,
) -> Result<Json<StatusBody>, ApiError> {
    let failure = Failure {
        request: &request,
        reporter: &**reporter,
        environment: &reporting.environment,
    };

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(failure
            .report(EMPTY_BODY.into(), None)
            .await
            .with_code("empty_body")
            .with_message(EMPTY_BODY));
    }

    let values = match parse_body(&body) {
        Ok(values) => values,
        Err(e) => {
            return Err(failure
                .report(format!("Failed to parse request body, {e}"), None)
                .await
                .with_code("invalid_json"));
        }
    };

    let form = match serde_json::from_value::<RsvpForm>(values.clone()) {
        Ok(form) => form,
        Err(e) => {
            return Err(failure
                .report(format!("Request body is not a form, {e}"), Some(values))
                .await
                .with_code("invalid_payload"));
        }
    };

    // Well-formed but invalid forms are answered with 422 and not reported
    let submission = form.to_submission().map_err(|errors| {
        log::debug!("Rejected invalid participant, {}", errors);
        ApiError::from(errors)
    })?;

    let properties = match mapper::participant_properties(&submission) {
        Ok(properties) => properties,
        Err(e) => {
            return Err(failure.report(e.to_string(), Some(values)).await);
        }
    };

    match store.create_record(&properties).await {
        Ok(id) => {
            log::info!("Stored participant as record {}", id);

            Ok(Json(StatusBody::ok()))
        }
        Err(e @ StoreError::MissingDatabaseId) => {
            let message = e.to_string();

            Err(failure
                .report(message.clone(), Some(values))
                .await
                .with_code("missing_database")
                .with_message(message))
        }
        Err(StoreError::Downstream(e)) => Err(failure
            .report(format!("{e:?}"), Some(values))
            .await
            .with_code("downstream_failed")),
    }
}

/// Decode the body, unwrapping a form that was encoded twice
fn parse_body(body: &[u8]) -> serde_json::Result<Value> {
    match serde_json::from_slice(body)? {
        Value::String(inner) => serde_json::from_str(&inner),
        values => Ok(values),
    }
}

struct Failure<'a> {
    request: &'a HttpRequest,
    reporter: &'a dyn ErrorReporter,
    environment: &'a str,
}

impl Failure<'_> {
    /// Hand the failure to the reporter and create the matching response
    async fn report(&self, message: String, values: Option<Value>) -> ApiError {
        let report = ErrorReport::new(message)
            .with_values(values)
            .with_headers(self.request.headers())
            .with_tag("environment", self.environment)
            .with_tag("end", "backend");

        self.reporter.report(report).await;

        ApiError::internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use crate::reporting::WebhookReporter;
    use async_trait::async_trait;
    use notion_client::Properties;
    use std::sync::{Arc, Mutex};
    use test_util::{assert_eq, assert_eq_json, complete_form};

    #[derive(Default)]
    struct FakeStore {
        failure: Option<fn() -> StoreError>,
        records: Mutex<Vec<Properties>>,
    }

    #[async_trait]
    impl RecordStore for FakeStore {
        async fn create_record(&self, properties: &Properties) -> Result<String, StoreError> {
            if let Some(failure) = self.failure {
                return Err(failure());
            }

            let mut records = self.records.lock().unwrap();
            records.push(properties.clone());

            Ok(format!("page-{}", records.len()))
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        reports: Mutex<Vec<ErrorReport>>,
    }

    #[async_trait]
    impl ErrorReporter for RecordingReporter {
        async fn report(&self, report: ErrorReport) {
            self.reports.lock().unwrap().push(report);
        }
    }

    struct Response {
        status: StatusCode,
        body: Value,
    }

    async fn post(
        store: &Arc<FakeStore>,
        reporter: &Arc<RecordingReporter>,
        body: impl Into<Bytes>,
    ) -> Response {
        post_to(store.clone(), reporter.clone(), body).await
    }

    async fn post_to(
        store: Arc<dyn RecordStore>,
        reporter: Arc<dyn ErrorReporter>,
        body: impl Into<Bytes>,
    ) -> Response {
        let app = test::init_service(
            App::new()
                .app_data(Data::from(store))
                .app_data(Data::from(reporter))
                .app_data(Data::new(ErrorReporting::default()))
                .service(web::scope("/api").service(add_participant)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/addParticipant")
            .insert_header((header::CONTENT_TYPE, "text/plain;charset=UTF-8"))
            .insert_header((header::USER_AGENT, "test-agent"))
            .set_payload(body.into())
            .to_request();

        let response = test::call_service(&app, request).await;
        let status = response.status();
        let body = test::read_body(response).await;

        Response {
            status,
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        }
    }

    fn form_body() -> String {
        serde_json::to_string(&complete_form()).unwrap()
    }

    #[actix_rt::test]
    async fn stores_valid_participant() {
        let store = Arc::new(FakeStore::default());
        let reporter = Arc::new(RecordingReporter::default());

        let response = post(&store, &reporter, form_body()).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq_json!(response.body, { "status": 200 });

        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq_json!(
            records[0].get("Jméno").unwrap().value(),
            { "type": "title", "title": [{ "type": "text", "text": { "content": "Jana" } }] }
        );
        assert!(reporter.reports.lock().unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn accepts_double_encoded_form() {
        let store = Arc::new(FakeStore::default());
        let reporter = Arc::new(RecordingReporter::default());

        let body = serde_json::to_string(&form_body()).unwrap();
        let response = post(&store, &reporter, body).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(store.records.lock().unwrap().len(), 1);
    }

    #[actix_rt::test]
    async fn empty_body_is_reported_once() {
        let store = Arc::new(FakeStore::default());
        let reporter = Arc::new(RecordingReporter::default());

        let response = post(&store, &reporter, "").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq_json!(
            response.body,
            { "code": "empty_body", "message": "The body of the request is empty." }
        );

        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message, EMPTY_BODY);
        assert_eq!(reports[0].values, None);
        assert_eq!(reports[0].tags["end"], "backend");
        assert_eq!(reports[0].tags["environment"], "production");
        assert_eq!(reports[0].headers["user-agent"], "test-agent");
        assert!(store.records.lock().unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn unparseable_body() {
        let store = Arc::new(FakeStore::default());
        let reporter = Arc::new(RecordingReporter::default());

        let response = post(&store, &reporter, "{\"firstName\": ").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body["code"], "invalid_json");
        assert_eq!(reporter.reports.lock().unwrap().len(), 1);

        let response = post(&store, &reporter, r#"{"count": "three"}"#).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body["code"], "invalid_payload");

        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq_json!(reports[1].values, { "count": "three" });
    }

    #[actix_rt::test]
    async fn invalid_form_is_rejected() {
        let store = Arc::new(FakeStore::default());
        let reporter = Arc::new(RecordingReporter::default());

        let body = r#"{
            "firstName": "Jana",
            "surName": "Nová",
            "email": "jana@example.com",
            "count": "more",
            "familyCount": "",
            "helpWithFood": "no",
            "arrival": "pátek",
            "departure": "v neděli"
        }"#;

        let response = post(&store, &reporter, body).await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq_json!(
            response.body,
            {
                "code": "validation_failed",
                "message": "Some provided values are invalid",
                "errors": [
                    {
                        "field": "familyCount",
                        "code": "value_required",
                        "message": "Vyplň kolik vás přijede."
                    }
                ]
            }
        );
        assert!(store.records.lock().unwrap().is_empty());
        assert!(reporter.reports.lock().unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn missing_database_id() {
        let store = Arc::new(FakeStore {
            failure: Some(|| StoreError::MissingDatabaseId),
            ..Default::default()
        });
        let reporter = Arc::new(RecordingReporter::default());

        let response = post(&store, &reporter, form_body()).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq_json!(
            response.body,
            { "code": "missing_database", "message": "DatabaseId is not defined." }
        );

        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].values.as_ref().unwrap()["firstName"], "Jana");
    }

    #[actix_rt::test]
    async fn downstream_failure_is_reported_once() {
        let store = Arc::new(FakeStore {
            failure: Some(|| StoreError::Downstream(anyhow::anyhow!("validation_error"))),
            ..Default::default()
        });
        let reporter = Arc::new(RecordingReporter::default());

        let response = post(&store, &reporter, form_body()).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq_json!(
            response.body,
            { "code": "downstream_failed", "message": "An internal server error occurred" }
        );

        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].message.contains("validation_error"));
    }

    #[actix_rt::test]
    async fn stalled_webhook_does_not_delay_response() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let endpoint = url::Url::parse(&format!("http://{addr}/report")).unwrap();

        let store = Arc::new(FakeStore {
            failure: Some(|| StoreError::MissingDatabaseId),
            ..Default::default()
        });
        let reporter = Arc::new(WebhookReporter::new(endpoint).unwrap());

        let response = actix_rt::time::timeout(
            std::time::Duration::from_secs(5),
            post_to(store, reporter, form_body()),
        )
        .await
        .expect("response was delayed by the error reporter");

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body["code"], "missing_database");
    }
}
