//! Battle.net API client library.
//!
//! A Rust library for the region-sharded Battle.net community API. A
//! [`Client`] is bound to one resource base path (e.g. `wow`) and turns a sub
//! path plus [`RequestOptions`] into a single GET against
//! `{http|https}://{region}.battle.net/api/{base}/{path}`.
//!
//! # Quick Start
//!
//! ```no_run
//! use battlenet::{Character, CharacterField, CharacterId, Client, Fetched, Get, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> battlenet::Result<()> {
//!     // Region and optional keys come from the environment
//!     let client = Client::from_env("wow")?;
//!
//!     let options = RequestOptions::new().fields(CharacterField::Stats | CharacterField::Guild);
//!     match Character::get(&client, CharacterId::new("Medivh", "Uther"), options).await? {
//!         Fetched::Data(character) => println!("{} (level {})", character.name, character.level),
//!         Fetched::NotModified => println!("unchanged"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Request shaping
//!
//! - The region is the per-call override, else the client's default.
//! - HTTPS is used, and requests are signed, only when both a public and a
//!   private key were configured.
//! - Query parameters keep their order: caller parameters, then `fields`,
//!   then `locale`. Duplicate keys are sent as is.
//! - A full URL override replaces the composed URL but still receives the
//!   query parameters.
//!
//! # Configuration
//!
//! [`Client::from_env`] reads:
//!
//! - `BATTLENET_REGION` (optional) - `us`, `eu`, `kr` or `tw` (defaults to `us`)
//! - `BATTLENET_PUBLIC_KEY` / `BATTLENET_PRIVATE_KEY` (optional) - application keys

pub mod cli;
mod client;
pub mod endpoint;
mod error;
pub mod fields;
mod models;
pub mod output;
mod params;
mod region;
mod request;
mod signing;
mod traits;

// Re-export core types
pub use client::{Client, ClientBuilder, ClientConfig, RequestDescriptor, RequestOptions};
pub use endpoint::QueryEncoding;
pub use error::{BattleNetError, Result};
pub use fields::Field;
pub use params::{merge as merge_parameters, Parameters};
pub use region::{Locale, Region};
pub use request::{Fetched, RequestManager};
pub use signing::{http_date, Credentials};

// Re-export traits
pub use traits::Get;

// Re-export models
pub use models::{
    // Character types
    Character,
    CharacterField,
    CharacterGuild,
    CharacterId,
    CharacterStats,
    Title,
    // Guild types
    Guild,
    GuildField,
    GuildId,
    GuildMember,
    MemberCharacter,
    // Realm types
    Realm,
    RealmStatus,
};

// Re-export the flag set type used for field selections
pub use enumflags2::BitFlags;
