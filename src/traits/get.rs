//! Get trait for fetching single resources.

use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::error::Result;
use crate::request::Fetched;

/// Fetch a single resource by ID.
///
/// Implement this trait for resource types that can be fetched individually.
/// The client's base path selects the game (e.g. `wow`); the implementation
/// maps the ID to the sub path.
///
/// # Example
///
/// ```ignore
/// use battlenet::{Character, CharacterField, CharacterId, Client, Get, Region, RequestOptions};
///
/// let client = Client::new("wow", Region::EU)?;
/// let character = Character::get(
///     &client,
///     CharacterId::new("Medivh", "Uther"),
///     RequestOptions::new().fields(CharacterField::Stats),
/// )
/// .await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this resource.
    type Id: Send;

    /// Fetch the resource by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Battle.net API client
    /// * `id` - The resource identifier
    /// * `options` - Region, fields, locale and conditional-fetch options
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is not found or the request fails.
    async fn get(client: &Client, id: Self::Id, options: RequestOptions) -> Result<Fetched<Self>>;
}
