//! Deeplink resolution library
//!
//! Turns activation URLs such as `deeplinker://oauth?code=abc123` into a
//! closed set of typed [`Deeplink`] values, or a [`DeeplinkError`] naming the
//! first check the URL failed.
//!

#[macro_use]
extern crate log;

pub mod config;
pub mod deeplinker;
pub mod encode;
pub mod error;
pub mod resolve;
pub mod slot;
pub mod source;
pub mod types;

pub use config::{SchemeConfig, DEFAULT_SCHEME};
pub use deeplinker::Deeplinker;
pub use error::{DeeplinkError, Result};
pub use slot::DeeplinkSlot;
pub use source::{LinkSource, ParsedLink, RawLink};
pub use types::{Deeplink, DeeplinkKind};

/// Resolve a URL string against `expected_scheme`.
///
/// # Errors
///
/// Returns `DeeplinkError` if the string is not a URL or does not describe a
/// known deeplink.
pub fn resolve(uri: &str, expected_scheme: &str) -> Result<Deeplink> {
    resolve::resolve_str(uri, expected_scheme)
}

/// Render a deeplink as a URL using `scheme`.
pub fn encode(link: &Deeplink, scheme: &str) -> String {
    encode::encode(link, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_exports() {
        let _: fn(&str, &str) -> Result<Deeplink> = resolve;
        let _: fn(&Deeplink, &str) -> String = encode;
    }
}
