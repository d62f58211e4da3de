use crate::error::Result;

/// The parts of an activation URL the resolver looks at.
///
/// Implemented for [`RawLink`], for [`url::Url`] (whose scheme is already
/// lowercased) and for [`ParsedLink`], which hosts can fill in when their
/// platform has already split the URL into components.
pub trait LinkSource {
    fn scheme(&self) -> Option<&str>;

    fn host(&self) -> Option<&str>;

    /// Percent-decoded query pairs in the order they appear. Empty when the
    /// URL has no query or an empty one.
    fn query_pairs(&self) -> Vec<(String, String)>;
}

impl LinkSource for url::Url {
    fn scheme(&self) -> Option<&str> {
        Some(url::Url::scheme(self))
    }

    fn host(&self) -> Option<&str> {
        self.host_str()
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        url::Url::query_pairs(self)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }
}

/// A parsed URL that keeps the scheme exactly as it was written.
///
/// [`url::Url`] lowercases schemes, which would let `Deeplinker://home` pass a
/// `deeplinker` check and make mixed-case prefixes unmatchable.
#[derive(Debug, Clone)]
pub struct RawLink {
    scheme: String,
    url: url::Url,
}

impl RawLink {
    /// # Errors
    ///
    /// Returns `Malformed` if `uri` is not an absolute URL.
    pub fn parse(uri: &str) -> Result<Self> {
        let url = url::Url::parse(uri)?;
        // The parser strips leading C0 controls and spaces before the scheme
        let trimmed = uri.trim_start_matches(|c: char| c <= ' ');
        let scheme = match trimmed.split_once(':') {
            Some((scheme, _)) => scheme.to_string(),
            None => url.scheme().to_string(),
        };
        Ok(RawLink { scheme, url })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }
}

impl LinkSource for RawLink {
    fn scheme(&self) -> Option<&str> {
        Some(&self.scheme)
    }

    fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        LinkSource::query_pairs(&self.url)
    }
}

/// A link whose components were parsed elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLink {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub query: Vec<(String, String)>,
}

impl ParsedLink {
    pub fn new(scheme: Option<String>, host: Option<String>) -> Self {
        ParsedLink {
            scheme,
            host,
            query: Vec::new(),
        }
    }

    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

impl LinkSource for ParsedLink {
    fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        self.query.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_components() {
        let url = url::Url::parse("deeplinker://oauth?code=abc%20123&state=x").unwrap();
        assert_eq!(LinkSource::scheme(&url), Some("deeplinker"));
        assert_eq!(LinkSource::host(&url), Some("oauth"));
        assert_eq!(
            LinkSource::query_pairs(&url),
            vec![
                ("code".to_string(), "abc 123".to_string()),
                ("state".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_url_without_query() {
        let url = url::Url::parse("deeplinker://home").unwrap();
        assert!(LinkSource::query_pairs(&url).is_empty());

        // An empty query is the same as no query
        let url = url::Url::parse("deeplinker://home?").unwrap();
        assert!(LinkSource::query_pairs(&url).is_empty());
    }

    #[test]
    fn test_raw_link_keeps_scheme() {
        let link = RawLink::parse("MyApp://profile?id=42").unwrap();
        assert_eq!(link.scheme(), Some("MyApp"));
        assert_eq!(link.url().scheme(), "myapp");
        assert_eq!(link.host(), Some("profile"));
        assert_eq!(link.query_pairs(), vec![("id".to_string(), "42".to_string())]);

        let link = RawLink::parse("  deeplinker://home").unwrap();
        assert_eq!(link.scheme(), Some("deeplinker"));
    }

    #[test]
    fn test_raw_link_malformed() {
        assert!(RawLink::parse("home").is_err());
        assert!(RawLink::parse("").is_err());
    }

    #[test]
    fn test_parsed_link() {
        let link = ParsedLink::new(Some("deeplinker".to_string()), Some("profile".to_string()))
            .query_pair("id", "42");
        assert_eq!(link.scheme(), Some("deeplinker"));
        assert_eq!(link.host(), Some("profile"));
        assert_eq!(link.query_pairs(), vec![("id".to_string(), "42".to_string())]);

        let empty = ParsedLink::default();
        assert_eq!(empty.scheme(), None);
        assert_eq!(empty.host(), None);
    }
}
