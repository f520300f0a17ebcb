//! Regions and locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BattleNetError;

/// Geographic API shard. Selects the `{region}.battle.net` host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States
    #[default]
    US,
    /// Europe
    EU,
    /// Korea
    KR,
    /// Taiwan
    TW,
}

impl Region {
    /// All regions, in declaration order.
    pub const ALL: [Region; 4] = [Region::US, Region::EU, Region::KR, Region::TW];

    /// Lowercase subdomain for this region.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::US => "us",
            Region::EU => "eu",
            Region::KR => "kr",
            Region::TW => "tw",
        }
    }

    /// API host for this region.
    pub fn host(self) -> String {
        format!("{}.battle.net", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = BattleNetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BattleNetError::InvalidRegion(s.to_string()))
    }
}

/// Locale tags accepted by the `locale` query parameter.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    en_US,
    es_MX,
    en_GB,
    fr_FR,
    ru_RU,
    de_DE,
    ko_KR,
    zh_TW,
    zh_CN,
}

impl Locale {
    pub const ALL: [Locale; 9] = [
        Locale::en_US,
        Locale::es_MX,
        Locale::en_GB,
        Locale::fr_FR,
        Locale::ru_RU,
        Locale::de_DE,
        Locale::ko_KR,
        Locale::zh_TW,
        Locale::zh_CN,
    ];

    /// The tag as sent on the wire, e.g. `en_US`.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::en_US => "en_US",
            Locale::es_MX => "es_MX",
            Locale::en_GB => "en_GB",
            Locale::fr_FR => "fr_FR",
            Locale::ru_RU => "ru_RU",
            Locale::de_DE => "de_DE",
            Locale::ko_KR => "ko_KR",
            Locale::zh_TW => "zh_TW",
            Locale::zh_CN => "zh_CN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = BattleNetError;

    /// Accepts `en_US`, `en-us` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Locale::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| BattleNetError::InvalidLocale(s.to_string()))
    }
}
