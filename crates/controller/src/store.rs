// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Storage of participant records
use crate::settings;
use async_trait::async_trait;
use notion_client::{NotionClient, Properties};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("DatabaseId is not defined.")]
    MissingDatabaseId,
    #[error(transparent)]
    Downstream(#[from] anyhow::Error),
}

/// A place where participant records are written to
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Write a single record, returns the id it was stored under
    async fn create_record(&self, properties: &Properties) -> Result<String, StoreError>;
}

/// Stores every record as a page of a Notion database
#[derive(Debug)]
pub struct NotionDatabase {
    client: NotionClient,
    database_id: Option<String>,
}

impl NotionDatabase {
    pub fn new(client: NotionClient, database_id: Option<String>) -> Self {
        Self {
            client,
            database_id,
        }
    }

    pub fn from_settings(settings: &settings::Notion) -> Self {
        let client = NotionClient::new(settings.base_url.clone(), settings.api_key.clone())
            .with_version(settings.version.clone());

        Self::new(client, settings.database_id.clone())
    }
}

#[async_trait]
impl RecordStore for NotionDatabase {
    async fn create_record(&self, properties: &Properties) -> Result<String, StoreError> {
        let database_id = self
            .database_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(StoreError::MissingDatabaseId)?;

        let page_id = self.client.create_page(database_id, properties).await?;

        log::debug!("Created page {} in database {}", page_id, database_id);

        Ok(page_id)
    }
}
