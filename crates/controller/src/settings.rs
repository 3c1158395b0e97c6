// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Handles the application settings via a config file and environment variables.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Contains the application settings.
///
/// The application settings are set with a TOML config file. Settings specified in the config file
/// can be overwritten by environment variables. To do so, set an environment variable
/// with the prefix `RSVP_CTRL_` followed by the field names you want to set. Nested fields are separated by two underscores `__`.
/// ```sh
/// RSVP_CTRL_<field>__<field-of-field>...
/// ```
///
/// # Example
///
/// set the `notion.api_key` field:
/// ```sh
/// RSVP_CTRL_NOTION__API_KEY=secret_123
/// ```
///
/// So the field 'notion.database_id' would resolve to:
/// ```sh
/// RSVP_CTRL_NOTION__DATABASE_ID=d9824bdc84454327be8b5b47500af6ce
/// ```
/// # Note
/// Fields set via environment variables do not affect the underlying config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub http: Http,
    pub notion: Notion,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub error_reporting: ErrorReporting,
}

impl Settings {
    /// Creates a new Settings instance from the provided TOML file.
    /// Specific fields can be set or overwritten with environment variables (See struct level docs for more details).
    pub fn load(file_name: &Path) -> Result<Self, ConfigError> {
        let env = Environment::with_prefix("RSVP_CTRL")
            .prefix_separator("_")
            .separator("__");

        Config::builder()
            .add_source(File::from(file_name))
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Http {
    #[serde(default = "default_http_port")]
    pub port: u16,
    #[serde(default)]
    pub cors: HttpCors,
}

impl Default for Http {
    fn default() -> Self {
        Self {
            port: default_http_port(),
            cors: HttpCors::default(),
        }
    }
}

/// Settings for CORS (Cross Origin Resource Sharing)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpCors {
    #[serde(default)]
    pub allowed_origin: Vec<String>,
}

/// Access to the Notion database that stores the participants
#[derive(Clone, Deserialize)]
pub struct Notion {
    #[serde(default = "default_notion_url")]
    pub base_url: Url,
    pub api_key: String,
    /// Requests fail while no database is configured
    #[serde(default)]
    pub database_id: Option<String>,
    #[serde(default = "default_notion_version")]
    pub version: String,
}

impl std::fmt::Debug for Notion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notion")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"****")
            .field("database_id", &self.database_id)
            .field("version", &self.version)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    #[serde(default = "default_directives")]
    pub default_directives: Vec<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            default_directives: default_directives(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorReporting {
    /// Sent as the `environment` tag of every report
    #[serde(default = "default_environment")]
    pub environment: String,
    /// JSON webhook receiving the reports, they are only logged if unset
    #[serde(default)]
    pub endpoint: Option<Url>,
}

impl Default for ErrorReporting {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            endpoint: None,
        }
    }
}

const fn default_http_port() -> u16 {
    11311
}

fn default_notion_url() -> Url {
    Url::parse("https://api.notion.com/").expect("Invalid default notion URL")
}

fn default_notion_version() -> String {
    notion_client::DEFAULT_NOTION_VERSION.into()
}

fn default_directives() -> Vec<String> {
    // Disable spamming noninformative traces
    vec![
        "rsvp_controller_core=INFO".into(),
        "notion_client=INFO".into(),
        "rustls=WARN".into(),
        "mio=ERROR".into(),
        "hyper=WARN".into(),
    ]
}

fn default_environment() -> String {
    "production".into()
}
