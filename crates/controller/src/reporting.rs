// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Reporting of server side failures
//!
//! Every failure of the participant endpoint is handed to an [`ErrorReporter`] together with
//! the submitted values, the request headers and a set of tags. Reports are either only logged
//! ([`TracingReporter`]) or additionally posted to a JSON webhook ([`WebhookReporter`]).
use crate::settings;
use actix_web::http::header::{self, HeaderMap};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const REDACTED: &str = "[redacted]";

/// Upper limit for delivering a single report to the webhook
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// A single failure with its context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    /// The submitted values, if the body could be parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
    pub headers: BTreeMap<String, String>,
    pub tags: BTreeMap<String, String>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            values: None,
            headers: BTreeMap::new(),
            tags: BTreeMap::new(),
        }
    }

    pub fn with_values(mut self, values: Option<serde_json::Value>) -> Self {
        self.values = values;
        self
    }

    /// Attach the request headers, credentials are redacted
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers.iter() {
            let value = if *name == header::AUTHORIZATION || *name == header::COOKIE {
                REDACTED
            } else {
                match value.to_str() {
                    Ok(value) => value,
                    Err(_) => continue,
                }
            };

            self.headers.insert(name.as_str().into(), value.into());
        }

        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

#[async_trait]
pub trait ErrorReporter: Send + Sync {
    async fn report(&self, report: ErrorReport);
}

/// Writes reports to the log
#[derive(Debug, Default)]
pub struct TracingReporter;

#[async_trait]
impl ErrorReporter for TracingReporter {
    async fn report(&self, report: ErrorReport) {
        log_report(&report);
    }
}

fn log_report(report: &ErrorReport) {
    log::error!(
        "{}, tags={:?}, values={}",
        report.message,
        report.tags,
        report
            .values
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    );
}

/// Logs reports and posts them as JSON to a webhook
///
/// The delivery runs in the background, [`ErrorReporter::report`] returns as soon as the
/// report was logged.
#[derive(Debug)]
pub struct WebhookReporter {
    client: Client,
    endpoint: Url,
}

impl WebhookReporter {
    pub fn new(endpoint: Url) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(DELIVERY_TIMEOUT).build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ErrorReporter for WebhookReporter {
    async fn report(&self, report: ErrorReport) {
        log_report(&report);

        let request = self.client.post(self.endpoint.clone()).json(&report);
        let endpoint = self.endpoint.clone();

        actix_rt::spawn(async move {
            let result = request
                .send()
                .await
                .and_then(|response| response.error_for_status());

            if let Err(e) = result {
                log::warn!("Failed to deliver error report to {}, {}", endpoint, e);
            }
        });
    }
}

/// Create the reporter configured in the settings
pub fn from_settings(
    settings: &settings::ErrorReporting,
) -> reqwest::Result<Arc<dyn ErrorReporter>> {
    let reporter: Arc<dyn ErrorReporter> = match &settings.endpoint {
        Some(endpoint) => Arc::new(WebhookReporter::new(endpoint.clone())?),
        None => Arc::new(TracingReporter),
    };

    Ok(reporter)
}
