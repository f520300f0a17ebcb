//! Realm status model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{Client, RequestOptions};
use crate::error::Result;
use crate::request::Fetched;
use crate::traits::Get;

/// Status of one realm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Realm {
    pub name: String,
    pub slug: String,
    /// Realm type, e.g. `pve`, `pvp`, `rp`.
    #[serde(rename = "type")]
    pub realm_type: String,
    /// Whether the realm is up.
    pub status: bool,
    #[serde(default)]
    pub queue: bool,
    /// Population label, e.g. `low`, `medium`, `high`.
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub battlegroup: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// Answer of the `realm/status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmStatus {
    pub realms: Vec<Realm>,
}

impl RealmStatus {
    /// Realms that are currently down.
    pub fn offline(&self) -> impl Iterator<Item = &Realm> {
        self.realms.iter().filter(|r| !r.status)
    }
}

#[async_trait]
impl Get for RealmStatus {
    /// Realm slugs to restrict the answer to; empty for all realms.
    type Id = Vec<String>;

    #[tracing::instrument(skip(client, options))]
    async fn get(
        client: &Client,
        realms: Self::Id,
        options: RequestOptions,
    ) -> Result<Fetched<Self>> {
        let options = if realms.is_empty() {
            options
        } else {
            options.param("realms", realms.join(","))
        };
        client.get("realm/status", options).await
    }
}
