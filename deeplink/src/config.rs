use parking_lot::RwLock;

/// Scheme expected when nothing else is configured.
pub const DEFAULT_SCHEME: &str = "deeplinker";

/// Holder of the expected URL scheme.
///
/// Reads take a snapshot, so a concurrent [`SchemeConfig::set`] only affects
/// resolutions that start after it.
#[derive(Debug)]
pub struct SchemeConfig {
    scheme: RwLock<String>,
}

impl SchemeConfig {
    pub fn new(scheme: impl Into<String>) -> Self {
        SchemeConfig {
            scheme: RwLock::new(scheme.into()),
        }
    }

    pub fn get(&self) -> String {
        self.scheme.read().clone()
    }

    /// Replace the expected scheme, returning the previous one.
    pub fn set(&self, scheme: impl Into<String>) -> String {
        let scheme = scheme.into();
        let mut current = self.scheme.write();
        info!("URL prefix changed from {} to {}.", *current, scheme);
        std::mem::replace(&mut *current, scheme)
    }
}

impl Default for SchemeConfig {
    fn default() -> Self {
        SchemeConfig::new(DEFAULT_SCHEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        assert_eq!(SchemeConfig::default().get(), "deeplinker");
    }

    #[test]
    fn test_set_returns_previous() {
        let config = SchemeConfig::default();
        assert_eq!(config.set("myapp"), "deeplinker");
        assert_eq!(config.get(), "myapp");
        assert_eq!(config.set("other"), "myapp");
        assert_eq!(config.get(), "other");
    }
}
