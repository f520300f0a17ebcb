//! Guild profile model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use enumflags2::bitflags;
use serde::{Deserialize, Serialize};

use crate::client::{Client, RequestOptions};
use crate::error::Result;
use crate::fields::Field;
use crate::request::Fetched;
use crate::traits::Get;

/// Optional sections of a guild profile.
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildField {
    Members = 1 << 0,
    Achievements = 1 << 1,
    News = 1 << 2,
    Challenge = 1 << 3,
}

impl Field for GuildField {
    fn name(self) -> &'static str {
        match self {
            GuildField::Members => "Members",
            GuildField::Achievements => "Achievements",
            GuildField::News => "News",
            GuildField::Challenge => "Challenge",
        }
    }
}

/// Identifies a guild: realm plus guild name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildId {
    pub realm: String,
    pub name: String,
}

impl GuildId {
    pub fn new(realm: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
            name: name.into(),
        }
    }

    /// Sub path of the guild endpoint.
    pub fn path(&self) -> String {
        format!("guild/{}/{}", self.realm, self.name)
    }
}

/// A World of Warcraft guild profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub name: String,
    pub realm: String,

    #[serde(default)]
    pub battlegroup: Option<String>,

    #[serde(default)]
    pub level: u32,

    /// 0 for Alliance, 1 for Horde.
    #[serde(default)]
    pub side: u8,

    #[serde(default)]
    pub achievement_points: u32,

    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Present when [`GuildField::Members`] was requested.
    #[serde(default)]
    pub members: Vec<GuildMember>,
}

impl Guild {
    pub fn faction(&self) -> &'static str {
        if self.side == 0 {
            "Alliance"
        } else {
            "Horde"
        }
    }

    /// The guild master, if members were requested.
    pub fn leader(&self) -> Option<&GuildMember> {
        self.members.iter().find(|m| m.rank == 0)
    }
}

/// One entry of a guild roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildMember {
    pub character: MemberCharacter,
    /// 0 is the guild master.
    pub rank: u32,
}

/// Character summary inside a guild roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCharacter {
    pub name: String,
    pub realm: String,
    pub class: u32,
    pub race: u32,
    #[serde(default)]
    pub gender: u8,
    pub level: u32,
    #[serde(default)]
    pub achievement_points: u32,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[async_trait]
impl Get for Guild {
    type Id = GuildId;

    #[tracing::instrument(skip(client, options))]
    async fn get(client: &Client, id: Self::Id, options: RequestOptions) -> Result<Fetched<Self>> {
        client.get(&id.path(), options).await
    }
}
