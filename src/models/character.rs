//! Character profile model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use enumflags2::bitflags;
use serde::{Deserialize, Serialize};

use crate::client::{Client, RequestOptions};
use crate::error::Result;
use crate::fields::Field;
use crate::request::Fetched;
use crate::traits::Get;

/// Optional sections of a character profile.
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterField {
    Guild = 1 << 0,
    Stats = 1 << 1,
    Talents = 1 << 2,
    Items = 1 << 3,
    Reputation = 1 << 4,
    Titles = 1 << 5,
    Professions = 1 << 6,
    Appearance = 1 << 7,
    Companions = 1 << 8,
    Mounts = 1 << 9,
    Pets = 1 << 10,
    Achievements = 1 << 11,
    Progression = 1 << 12,
    Pvp = 1 << 13,
    Quests = 1 << 14,
    HunterPets = 1 << 15,
}

impl Field for CharacterField {
    fn name(self) -> &'static str {
        match self {
            CharacterField::Guild => "Guild",
            CharacterField::Stats => "Stats",
            CharacterField::Talents => "Talents",
            CharacterField::Items => "Items",
            CharacterField::Reputation => "Reputation",
            CharacterField::Titles => "Titles",
            CharacterField::Professions => "Professions",
            CharacterField::Appearance => "Appearance",
            CharacterField::Companions => "Companions",
            CharacterField::Mounts => "Mounts",
            CharacterField::Pets => "Pets",
            CharacterField::Achievements => "Achievements",
            CharacterField::Progression => "Progression",
            CharacterField::Pvp => "Pvp",
            CharacterField::Quests => "Quests",
            CharacterField::HunterPets => "HunterPets",
        }
    }
}

/// Identifies a character: realm plus character name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterId {
    pub realm: String,
    pub name: String,
}

impl CharacterId {
    pub fn new(realm: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
            name: name.into(),
        }
    }

    /// Sub path of the character endpoint.
    pub fn path(&self) -> String {
        format!("character/{}/{}", self.realm, self.name)
    }
}

/// A World of Warcraft character profile.
///
/// Sections requested through [`CharacterField`] are `None`/empty unless
/// they were asked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub realm: String,

    #[serde(default)]
    pub battlegroup: Option<String>,

    /// Class ID.
    pub class: u32,

    /// Race ID.
    pub race: u32,

    /// 0 for male, 1 for female.
    #[serde(default)]
    pub gender: u8,

    pub level: u32,

    #[serde(default)]
    pub achievement_points: u32,

    /// Avatar path, relative to the region's static render host.
    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub calc_class: Option<String>,

    #[serde(default)]
    pub total_honorable_kills: Option<u32>,

    /// When the profile last changed. Milliseconds since the epoch on the wire.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(default)]
    pub guild: Option<CharacterGuild>,

    #[serde(default)]
    pub stats: Option<CharacterStats>,

    #[serde(default)]
    pub titles: Vec<Title>,
}

impl Character {
    /// Name with the selected title applied, e.g. `Uther the Lightbringer`.
    pub fn display_name(&self) -> String {
        match self.titles.iter().find(|t| t.selected) {
            Some(title) => title.name.replace("%s", &self.name),
            None => self.name.clone(),
        }
    }
}

/// Guild summary embedded in a character profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterGuild {
    pub name: String,
    pub realm: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub members: Option<u32>,
    #[serde(default)]
    pub achievement_points: Option<u32>,
}

/// A character title. `name` contains `%s` where the character name goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub selected: bool,
}

/// Character statistics, returned with the `stats` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterStats {
    pub health: i64,
    pub power: i64,
    #[serde(rename = "str")]
    pub strength: i64,
    #[serde(rename = "agi")]
    pub agility: i64,
    #[serde(rename = "sta")]
    pub stamina: i64,
    #[serde(rename = "int")]
    pub intellect: i64,
    #[serde(rename = "spr")]
    pub spirit: i64,
    pub attack_power: i64,
    pub ranged_attack_power: i64,
    pub mastery: f64,
    pub mastery_rating: i64,
    pub crit: f64,
    pub crit_rating: i64,
    pub hit_percent: f64,
    pub hit_rating: i64,
    pub haste_rating: i64,
    pub expertise_rating: i64,
    pub spell_power: i64,
    pub spell_pen: i64,
    pub spell_crit: f64,
    pub spell_crit_rating: i64,
    pub spell_hit_percent: f64,
    pub spell_hit_rating: i64,
    #[serde(rename = "mana5")]
    pub mana_per_5: i64,
    #[serde(rename = "mana5combat")]
    pub mana_per_5_in_combat: i64,
    pub armor: i64,
    pub dodge: f64,
    pub dodge_rating: i64,
    pub parry: f64,
    pub parry_rating: i64,
    pub block: f64,
    pub block_rating: i64,
    #[serde(rename = "resil")]
    pub resilience: i64,
    #[serde(rename = "mainHandDmgMin")]
    pub main_hand_damage_min: i64,
    #[serde(rename = "mainHandDmgMax")]
    pub main_hand_damage_max: i64,
    pub main_hand_speed: f64,
    pub main_hand_dps: f64,
    pub main_hand_expertise: f64,
    #[serde(rename = "offHandDmgMin")]
    pub off_hand_damage_min: i64,
    #[serde(rename = "offHandDmgMax")]
    pub off_hand_damage_max: i64,
    pub off_hand_speed: f64,
    pub off_hand_dps: f64,
    pub off_hand_expertise: f64,
    #[serde(rename = "rangedDmgMin")]
    pub ranged_damage_min: i64,
    #[serde(rename = "rangedDmgMax")]
    pub ranged_damage_max: i64,
    pub ranged_speed: f64,
    pub ranged_dps: f64,
    pub ranged_crit: f64,
    pub ranged_crit_rating: i64,
    pub ranged_hit_percent: f64,
    pub ranged_hit_rating: i64,
}

#[async_trait]
impl Get for Character {
    type Id = CharacterId;

    #[tracing::instrument(skip(client, options))]
    async fn get(client: &Client, id: Self::Id, options: RequestOptions) -> Result<Fetched<Self>> {
        client.get(&id.path(), options).await
    }
}
