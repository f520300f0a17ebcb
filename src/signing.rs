//! Battle.net request signing.
//!
//! A signed request carries a `Date` header and an
//! `Authorization: BNET <public key>:<signature>` header, where the signature
//! is the base64 HMAC-SHA1 of `"{method}\n{date}\n{path}\n"` keyed by the
//! private key.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{BattleNetError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Public/private application key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub public_key: String,
    private_key: String,
}

impl Credentials {
    /// Build credentials when both keys are present and not blank.
    pub fn new(public_key: Option<&str>, private_key: Option<&str>) -> Option<Self> {
        let public_key = public_key.filter(|k| !k.trim().is_empty())?;
        let private_key = private_key.filter(|k| !k.trim().is_empty())?;
        Some(Self {
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
        })
    }

    /// Signature for a request, base64 encoded.
    pub fn sign(&self, method: &str, date: &str, path: &str) -> Result<String> {
        let mut mac = HmacSha1::new_from_slice(self.private_key.as_bytes())
            .map_err(|e| BattleNetError::Signing(e.to_string()))?;
        mac.update(format!("{method}\n{date}\n{path}\n").as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }

    /// Value of the `Authorization` header for a request.
    pub fn authorization(&self, method: &str, date: &str, path: &str) -> Result<String> {
        let signature = self.sign(method, date, path)?;
        Ok(format!("BNET {}:{}", self.public_key, signature))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Format a timestamp as an RFC 1123 HTTP date, e.g.
/// `Tue, 15 Mar 2011 17:42:11 GMT`.
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
