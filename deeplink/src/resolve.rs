use crate::error::{DeeplinkError, Result};
use crate::source::{LinkSource, RawLink};
use crate::types::{Deeplink, DeeplinkKind};

/// Value of the first pair named `key`. Later duplicates are ignored and an
/// empty value still counts as present.
fn first_value(pairs: &[(String, String)], key: &'static str) -> Result<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .ok_or(DeeplinkError::UnknownQueryParameter { expecting: key })
}

/// Resolve a link into a [`Deeplink`].
///
/// Checks run in a fixed order, so the first failing one decides the error:
/// scheme, then host, then the number of query parameters, then the
/// required parameter name.
///
/// # Errors
///
/// Returns `UnknownScheme`, `UnknownDeeplink`, `ExpectedQueryParameters` or
/// `UnknownQueryParameter`.
pub fn resolve(link: &impl LinkSource, expected_scheme: &str) -> Result<Deeplink> {
    if link.scheme() != Some(expected_scheme) {
        return Err(DeeplinkError::UnknownScheme {
            received: link.scheme().map(str::to_string),
        });
    }

    let host = link.host();
    let kind = host
        .and_then(DeeplinkKind::from_tag)
        .ok_or_else(|| DeeplinkError::UnknownDeeplink {
            received: host.map(str::to_string),
        })?;

    let pairs = link.query_pairs();

    let value = match (kind.arity(), pairs.is_empty()) {
        (None, true) => None,
        (None, false) => {
            return Err(DeeplinkError::ExpectedQueryParameters {
                expecting: 0,
                received: pairs.len(),
            })
        }
        (Some(expecting), true) => {
            return Err(DeeplinkError::ExpectedQueryParameters {
                expecting,
                received: 0,
            })
        }
        (Some(_), false) => match kind.required_parameter() {
            Some(key) => Some(first_value(&pairs, key)?),
            None => None,
        },
    };

    kind.with_value(value).ok_or_else(|| DeeplinkError::UnknownDeeplink {
        received: host.map(str::to_string),
    })
}

/// Parse `uri` and resolve it.
///
/// The scheme is compared as written in `uri`, not in the lowercased form
/// the URL parser normalises it to.
///
/// # Errors
///
/// Returns `Malformed` if `uri` is not a URL, otherwise the errors of
/// [`resolve`].
pub fn resolve_str(uri: &str, expected_scheme: &str) -> Result<Deeplink> {
    let link = RawLink::parse(uri)?;
    resolve(&link, expected_scheme)
}
