//! Request URL construction.
//!
//! Composed URLs have the shape
//! `{http|https}://{region}.battle.net/api/{base_path}/{sub_path}[?k1=v1&k2=v2]`.

use crate::params::Parameters;
use crate::region::Region;

/// How query keys and values are written into the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Keys and values are written exactly as given. Values containing `&`,
    /// `=` or `#` will corrupt the query string.
    #[default]
    Verbatim,
    /// Keys and values are percent-encoded.
    Percent,
}

/// Strip leading and trailing slashes.
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Compose the URL of a resource, without query string.
///
/// `sub_path` is appended after a `/` as is; an empty sub path leaves a
/// trailing slash.
pub fn compose(base_path: &str, sub_path: &str, region: Region, use_https: bool) -> String {
    let scheme = if use_https { "https" } else { "http" };
    format!(
        "{}://{}/api/{}/{}",
        scheme,
        region.host(),
        base_path,
        sub_path
    )
}

/// Render parameters as `k1=v1&k2=v2`, in order.
pub fn query_string(params: &Parameters, encoding: QueryEncoding) -> String {
    params
        .iter()
        .map(|(k, v)| match encoding {
            QueryEncoding::Verbatim => format!("{k}={v}"),
            QueryEncoding::Percent => {
                format!("{}={}", urlencoding::encode(k), urlencoding::encode(v))
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the final request URL.
///
/// A `full_url` override replaces the composed URL entirely, but the
/// parameters are still appended to it.
pub fn build(
    full_url: Option<&str>,
    base_path: &str,
    sub_path: Option<&str>,
    region: Region,
    use_https: bool,
    params: &Parameters,
    encoding: QueryEncoding,
) -> String {
    let url = match full_url {
        Some(url) => url.to_string(),
        None => compose(base_path, sub_path.unwrap_or_default(), region, use_https),
    };

    if params.is_empty() {
        url
    } else {
        format!("{}?{}", url, query_string(params, encoding))
    }
}
