// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};

mod property;

pub use property::{
    FieldValue, Properties, PropertyDef, PropertyError, PropertyType, PropertyValue, RichText,
    SelectOption, TextContent,
};

/// The API version sent with every request unless configured otherwise
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

#[derive(Clone)]
/// The client for the Notion API
pub struct NotionClient {
    /// reqwest client
    client: Client,
    /// The base url of the Notion API
    base_url: Url,
    /// The integration token
    api_key: String,
    /// Value of the `Notion-Version` header
    version: String,
}

impl std::fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct CreatePage<'a> {
    parent: Parent<'a>,
    properties: &'a Properties,
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Deserialize)]
/// A successful response of `pages.create`
struct PageResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
/// The error object returned by the Notion API
struct NotionError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl NotionClient {
    /// Create a new Notion client
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            version: DEFAULT_NOTION_VERSION.into(),
        }
    }

    /// Use a different `Notion-Version`
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Create a page with the given properties in the database `database_id`
    ///
    /// Returns the id of the created page
    pub async fn create_page(&self, database_id: &str, properties: &Properties) -> Result<String> {
        let url = self.base_url.join("v1/pages")?;

        let body = CreatePage {
            parent: Parent { database_id },
            properties,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", &self.version)
            .json(&body)
            .send()
            .await?;

        let page = verify_notion_response(response)
            .await
            .context("Failed to call notion endpoint 'pages.create'")?;

        Ok(page.id)
    }
}

async fn verify_notion_response(response: Response) -> Result<PageResponse> {
    let status = response.status();

    if !status.is_success() {
        let error = response.json::<NotionError>().await.ok();

        match error {
            Some(error) => bail!(
                "Non-success response from notion: {}, {}: {}",
                status,
                error.code,
                error.message
            ),
            None => bail!("Non-success response from notion: {}", status),
        }
    }

    let page = response
        .json::<PageResponse>()
        .await
        .context("Failed to read notion page response")?;

    Ok(page)
}
