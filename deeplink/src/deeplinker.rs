use crate::config::SchemeConfig;
use crate::error::Result;
use crate::resolve::resolve;
use crate::slot::DeeplinkSlot;
use crate::source::{LinkSource, RawLink};
use crate::types::Deeplink;

/// Owns the expected scheme and the slot a presentation layer reads from.
///
/// Construct one per application and pass it to whatever handles incoming
/// URLs.
#[derive(Debug, Default)]
pub struct Deeplinker {
    scheme: SchemeConfig,
    slot: DeeplinkSlot,
}

impl Deeplinker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Deeplinker {
            scheme: SchemeConfig::new(scheme),
            slot: DeeplinkSlot::new(),
        }
    }

    pub fn scheme(&self) -> String {
        self.scheme.get()
    }

    pub fn set_scheme_prefix(&self, scheme: impl Into<String>) {
        self.scheme.set(scheme);
    }

    pub fn slot(&self) -> &DeeplinkSlot {
        &self.slot
    }

    /// Resolve `link` against the scheme configured at call time.
    pub fn manage(&self, link: &impl LinkSource) -> Result<Deeplink> {
        let link = resolve(link, &self.scheme.get())?;
        debug!("Resolved deeplink {}", link);
        Ok(link)
    }

    /// Parse and resolve `uri`, then store the result in the slot.
    ///
    /// The slot is left untouched when resolution fails.
    pub fn open(&self, uri: &str) -> Result<Deeplink> {
        let link = RawLink::parse(uri).map_err(|e| {
            debug!("Rejected link {}: {}", uri, e);
            e
        })?;

        match self.manage(&link) {
            Ok(link) => {
                self.slot.store(link.clone());
                Ok(link)
            }
            Err(e) => {
                warn!("Rejected link {}: {}", uri, e);
                Err(e)
            }
        }
    }

    pub fn refresh(&self) {
        self.slot.refresh();
    }
}
