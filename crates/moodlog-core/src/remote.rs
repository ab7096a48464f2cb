//! Remote data gateway for the hosted `diary` table.
//!
//! The gateway speaks the PostgREST surface of a Supabase project. The remote
//! table is the source of truth; rows carry an ISO timestamp in the `date`
//! column, normalized to epoch milliseconds at this boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Entry, EntryId};
use crate::util::{compact_text, format_timestamp, parse_timestamp};

const DIARY_TABLE: &str = "diary";

/// Writable columns of one diary row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    /// RFC 3339 timestamp, as the remote column expects
    pub date: String,
    pub content: String,
    pub emotion_id: u8,
}

impl EntryFields {
    /// Build the writable columns from normalized entry values
    pub fn new(date_ms: i64, content: impl Into<String>, emotion_id: u8) -> Self {
        Self {
            date: format_timestamp(date_ms),
            content: content.into(),
            emotion_id,
        }
    }
}

/// One row of the remote `diary` table, as the server returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryRow {
    pub id: EntryId,
    pub date: String,
    pub content: String,
    pub emotion_id: u8,
}

impl DiaryRow {
    /// Normalize the row into an [`Entry`] with an epoch-millisecond date
    pub fn into_entry(self) -> Result<Entry> {
        let date = parse_timestamp(&self.date)
            .ok_or_else(|| Error::InvalidInput(format!("unrecognized row timestamp: {}", self.date)))?;

        Ok(Entry {
            id: self.id,
            date,
            content: self.content,
            emotion_id: self.emotion_id,
        })
    }
}

/// Trait for the remote `diary` table operations
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Fetch all rows
    async fn select_all(&self) -> Result<Vec<DiaryRow>>;

    /// Insert a row; the server assigns the row id
    async fn insert(&self, fields: EntryFields) -> Result<DiaryRow>;

    /// Update the row whose id equals `id`
    async fn update(&self, id: &EntryId, fields: EntryFields) -> Result<()>;

    /// Delete the row whose id equals `id`
    async fn delete(&self, id: &EntryId) -> Result<()>;
}

/// PostgREST implementation of [`RemoteGateway`]
#[derive(Clone)]
pub struct SupabaseGateway {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseGateway {
    /// Create a gateway for the given Supabase project URL and anon key
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidInput(
                "Supabase URL must include http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::builder().build()?,
            base_url,
            anon_key: anon_key.into(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{DIARY_TABLE}", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Remote(format!(
            "{} (HTTP {})",
            compact_text(&body),
            status.as_u16()
        )))
    }
}

#[async_trait]
impl RemoteGateway for SupabaseGateway {
    async fn select_all(&self) -> Result<Vec<DiaryRow>> {
        let response = self
            .authorize(self.client.get(self.table_url()))
            .query(&[("select", "*")])
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn insert(&self, fields: EntryFields) -> Result<DiaryRow> {
        let response = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&fields)
            .send()
            .await?;

        let mut rows: Vec<DiaryRow> = Self::check(response).await?.json().await?;
        rows.pop()
            .ok_or_else(|| Error::Remote("insert returned no rows".to_string()))
    }

    async fn update(&self, id: &EntryId, fields: EntryFields) -> Result<()> {
        let response = self
            .authorize(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&fields)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<()> {
        let response = self
            .authorize(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

/// Gateway used when no remote endpoint is configured.
///
/// Every call fails with [`Error::RemoteUnconfigured`], which routes all
/// mutations through the coordinator's failure-reconciliation path and turns
/// the store into a local-only mirror.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGateway;

#[async_trait]
impl RemoteGateway for OfflineGateway {
    async fn select_all(&self) -> Result<Vec<DiaryRow>> {
        Err(Error::RemoteUnconfigured)
    }

    async fn insert(&self, _fields: EntryFields) -> Result<DiaryRow> {
        Err(Error::RemoteUnconfigured)
    }

    async fn update(&self, _id: &EntryId, _fields: EntryFields) -> Result<()> {
        Err(Error::RemoteUnconfigured)
    }

    async fn delete(&self, _id: &EntryId) -> Result<()> {
        Err(Error::RemoteUnconfigured)
    }
}
