//! Battle.net API client.
//!
//! [`Client`] holds the immutable per-client configuration and turns a
//! resource path plus [`RequestOptions`] into one GET request. Typed resources
//! are fetched through the [`Get`](crate::Get) trait on model types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use enumflags2::BitFlags;
use serde::de::DeserializeOwned;

use crate::endpoint::{self, QueryEncoding};
use crate::error::{BattleNetError, Result};
use crate::fields::{self, Field};
use crate::params::{self, Parameters};
use crate::region::{Locale, Region};
use crate::request::{Fetched, RequestManager};
use crate::signing::Credentials;

const USER_AGENT: &str = concat!("battlenet/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_path: String,
    region: Region,
    credentials: Option<Credentials>,
    query_encoding: QueryEncoding,
}

impl ClientConfig {
    /// Resource base path, without leading or trailing slashes.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Default region.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Requests use HTTPS, and are signed, exactly when credentials are set.
    pub fn use_https(&self) -> bool {
        self.credentials.is_some()
    }

    /// Application keys, if both were configured.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// How query keys and values are written into the URL.
    pub fn query_encoding(&self) -> QueryEncoding {
        self.query_encoding
    }
}

/// Builder for [`Client`].
///
/// # Example
///
/// ```no_run
/// use battlenet::{Client, Region};
///
/// # fn example() -> battlenet::Result<()> {
/// let client = Client::builder()
///     .base_path("wow")
///     .region(Region::EU)
///     .keys(Some("public"), Some("private"))
///     .build()?;
/// assert!(client.use_https());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_path: Option<String>,
    region: Region,
    public_key: Option<String>,
    private_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    query_encoding: QueryEncoding,
}

impl ClientBuilder {
    /// Resource base path, e.g. `wow`. Required.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Default region. Defaults to [`Region::US`].
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Application keys. Signing and HTTPS are enabled only when both keys
    /// are present and not blank.
    pub fn keys(mut self, public_key: Option<&str>, private_key: Option<&str>) -> Self {
        self.public_key = public_key.map(str::to_string);
        self.private_key = private_key.map(str::to_string);
        self
    }

    /// User agent header. Defaults to `battlenet/<version>`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Query encoding. Defaults to [`QueryEncoding::Verbatim`].
    pub fn query_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.query_encoding = encoding;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`BattleNetError::ConfigMissing`] if no base path was given, or
    /// an error if the HTTP client cannot be built.
    pub fn build(self) -> Result<Client> {
        let base_path = self
            .base_path
            .ok_or_else(|| BattleNetError::ConfigMissing("base path is required".to_string()))?;

        let credentials =
            Credentials::new(self.public_key.as_deref(), self.private_key.as_deref());

        let requests = RequestManager::new(
            credentials.clone(),
            self.user_agent.as_deref().unwrap_or(USER_AGENT),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )?;

        let config = ClientConfig {
            base_path: endpoint::normalize_path(&base_path).to_string(),
            region: self.region,
            credentials,
            query_encoding: self.query_encoding,
        };

        Ok(Client {
            config: Arc::new(config),
            requests,
        })
    }
}

/// Per-call options for [`Client::get`].
///
/// # Example
///
/// ```
/// use battlenet::{CharacterField, Locale, Region, RequestOptions};
///
/// let options = RequestOptions::new()
///     .region(Region::EU)
///     .fields(CharacterField::Stats | CharacterField::Items)
///     .locale(Locale::en_GB);
/// assert_eq!(options.fields.as_deref(), Some("stats,items"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Caller parameters, placed before `fields` and `locale`.
    pub parameters: Option<Parameters>,
    /// Region override.
    pub region: Option<Region>,
    /// Selected `fields` value.
    pub fields: Option<String>,
    /// Use this URL instead of composing one. Parameters are still appended.
    pub full_url: Option<String>,
    /// Make the request conditional on a change since this time.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// Locale of localized strings, sent last as `locale`.
    pub locale: Option<Locale>,
}

impl RequestOptions {
    /// Options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a caller parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(Parameters::new)
            .push(key, value);
        self
    }

    /// Replace the caller parameters.
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Query this region instead of the client's default.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Request optional sub-resources.
    pub fn fields<F: Field>(mut self, flags: impl Into<BitFlags<F>>) -> Self {
        self.fields = Some(fields::select(flags));
        self
    }

    /// Request this URL instead of composing one.
    pub fn full_url(mut self, url: impl Into<String>) -> Self {
        self.full_url = Some(url.into());
        self
    }

    /// Make the request conditional on a change since `since`.
    pub fn if_modified_since(mut self, since: DateTime<Utc>) -> Self {
        self.if_modified_since = Some(since);
        self
    }

    /// Ask for strings in this locale.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }
}

/// Everything needed to issue one GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Final URL including the query string.
    pub url: String,
    /// Timestamp for the `If-Modified-Since` header.
    pub if_modified_since: Option<DateTime<Utc>>,
}

/// Battle.net API client for one resource base path (e.g. `wow`).
///
/// Cheaply cloneable; clones share the configuration and connection pool.
///
/// # Example
///
/// ```no_run
/// use battlenet::{Client, Region, RequestOptions};
///
/// # async fn example() -> battlenet::Result<()> {
/// let client = Client::new("wow", Region::US)?;
/// let status: serde_json::Value = client
///     .get("realm/status", RequestOptions::new())
///     .await?
///     .data()
///     .unwrap_or_default();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    requests: RequestManager,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_path", &self.config.base_path)
            .field("region", &self.config.region)
            .field("use_https", &self.config.use_https())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create an unsigned client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_path: &str, region: Region) -> Result<Self> {
        Self::builder().base_path(base_path).region(region).build()
    }

    /// Create a client from environment variables.
    ///
    /// Reads `BATTLENET_REGION` (defaults to `us`), and the optional
    /// `BATTLENET_PUBLIC_KEY` and `BATTLENET_PRIVATE_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if `BATTLENET_REGION` is not a known region.
    pub fn from_env(base_path: &str) -> Result<Self> {
        Self::from_env_with_region(base_path, None)
    }

    /// Like [`Client::from_env`], but `region`, when given, is used instead
    /// of `BATTLENET_REGION`, which is then not read at all.
    ///
    /// # Errors
    ///
    /// Returns an error if no region is given and `BATTLENET_REGION` is not
    /// a known region.
    pub fn from_env_with_region(base_path: &str, region: Option<Region>) -> Result<Self> {
        let region = match region {
            Some(region) => region,
            None => match env::var("BATTLENET_REGION") {
                Ok(region) => region.parse()?,
                Err(_) => Region::default(),
            },
        };
        let public_key = env::var("BATTLENET_PUBLIC_KEY").ok();
        let private_key = env::var("BATTLENET_PRIVATE_KEY").ok();

        Self::builder()
            .base_path(base_path)
            .region(region)
            .keys(public_key.as_deref(), private_key.as_deref())
            .build()
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resource base path.
    pub fn base_path(&self) -> &str {
        self.config.base_path()
    }

    /// Default region.
    pub fn region(&self) -> Region {
        self.config.region()
    }

    /// Whether requests use HTTPS and are signed.
    pub fn use_https(&self) -> bool {
        self.config.use_https()
    }

    /// Resolve the request for `path` without sending it.
    pub fn prepare(&self, path: &str, options: &RequestOptions) -> RequestDescriptor {
        let region = options.region.unwrap_or(self.config.region);
        let params = params::merge(
            options.parameters.clone(),
            options.fields.as_deref(),
            options.locale,
        );

        let url = endpoint::build(
            options.full_url.as_deref(),
            &self.config.base_path,
            Some(path),
            region,
            self.config.use_https(),
            &params,
            self.config.query_encoding,
        );

        RequestDescriptor {
            url,
            if_modified_since: options.if_modified_since,
        }
    }

    /// GET `path` and decode the response as `T`.
    ///
    /// # Errors
    ///
    /// Returns whatever the request fails with: transport errors, non-success
    /// statuses, or a body that does not decode as `T`.
    #[tracing::instrument(skip(self, options), fields(base_path = %self.config.base_path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Fetched<T>> {
        let request = self.prepare(path, &options);
        tracing::debug!(url = %request.url, "dispatching request");
        self.requests
            .get(&request.url, request.if_modified_since)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn client(region: Region) -> Client {
        Client::new("/wow/", region).unwrap()
    }

    #[test]
    fn test_missing_base_path_is_config_error() {
        let err = Client::builder().region(Region::EU).build().unwrap_err();
        assert!(matches!(err, BattleNetError::ConfigMissing(_)));
    }

    #[test]
    fn test_base_path_is_normalized() {
        assert_eq!(client(Region::US).base_path(), "wow");
    }

    #[test]
    fn test_explicit_region_ignores_env_region() {
        // Only test touching BATTLENET_REGION
        env::set_var("BATTLENET_REGION", "atlantis");

        let client = Client::from_env_with_region("wow", Some(Region::EU)).unwrap();
        assert_eq!(client.region(), Region::EU);

        let err = Client::from_env("wow").unwrap_err();
        assert!(matches!(err, BattleNetError::InvalidRegion(_)));

        env::remove_var("BATTLENET_REGION");
    }

    #[test]
    fn test_https_requires_both_keys() {
        let client = Client::builder()
            .base_path("wow")
            .keys(Some(""), Some("x"))
            .build()
            .unwrap();
        assert!(!client.use_https());

        let client = Client::builder()
            .base_path("wow")
            .keys(Some("pub"), Some(" \t"))
            .build()
            .unwrap();
        assert!(!client.use_https());

        let client = Client::builder()
            .base_path("wow")
            .keys(Some("pub"), Some("priv"))
            .build()
            .unwrap();
        assert!(client.use_https());
    }

    #[test]
    fn test_prepare_uses_default_region() {
        let request = client(Region::TW).prepare("realm/status", &RequestOptions::new());
        assert_eq!(request.url, "http://tw.battle.net/api/wow/realm/status");
        assert_eq!(request.if_modified_since, None);
    }

    #[test]
    fn test_prepare_region_override() {
        let options = RequestOptions::new().region(Region::KR);
        let request = client(Region::US).prepare("realm/status", &options);
        assert_eq!(request.url, "http://kr.battle.net/api/wow/realm/status");
    }

    #[test]
    fn test_prepare_parameter_order() {
        let options = RequestOptions::new()
            .param("realms", "medivh")
            .locale(Locale::en_US)
            .fields(crate::CharacterField::Guild | crate::CharacterField::Stats);
        let request = client(Region::US).prepare("character/medivh/uther", &options);
        assert_eq!(
            request.url,
            "http://us.battle.net/api/wow/character/medivh/uther?realms=medivh&fields=guild,stats&locale=en_US"
        );
    }

    #[test]
    fn test_prepare_full_url_keeps_derived_params() {
        let options = RequestOptions::new()
            .full_url("http://custom/x")
            .locale(Locale::de_DE);
        let request = client(Region::EU).prepare("ignored", &options);
        assert_eq!(request.url, "http://custom/x?locale=de_DE");
    }

    #[test]
    fn test_prepare_carries_if_modified_since() {
        let since = Utc.with_ymd_and_hms(2012, 6, 1, 0, 0, 0).unwrap();
        let options = RequestOptions::new().if_modified_since(since);
        let request = client(Region::US).prepare("guild/medivh/x", &options);
        assert_eq!(request.if_modified_since, Some(since));
    }

    #[test]
    fn test_prepare_percent_encoding() {
        let client = Client::builder()
            .base_path("wow")
            .query_encoding(QueryEncoding::Percent)
            .build()
            .unwrap();
        let options = RequestOptions::new().param("realms", "Die Aldor,Zul'jin");
        let request = client.prepare("realm/status", &options);
        assert_eq!(
            request.url,
            "http://us.battle.net/api/wow/realm/status?realms=Die%20Aldor%2CZul%27jin"
        );
    }

    #[test]
    fn test_client_debug() {
        let client = Client::builder()
            .base_path("wow")
            .keys(Some("pub"), Some("secret-key"))
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("Client"));
        assert!(debug.contains("use_https: true"));
        assert!(!debug.contains("secret-key"));
    }
}
