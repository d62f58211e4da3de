use crate::types::Deeplink;
use parking_lot::Mutex;

/// The most recently resolved deeplink, waiting to be acted on.
///
/// A consumer must [`refresh`](DeeplinkSlot::refresh) the slot once it has
/// navigated, otherwise activating the same URL again would look like no
/// change at all.
#[derive(Debug, Default)]
pub struct DeeplinkSlot {
    current: Mutex<Option<Deeplink>>,
}

impl DeeplinkSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `link`, replacing whatever was there.
    pub fn store(&self, link: Deeplink) {
        *self.current.lock() = Some(link);
    }

    pub fn current(&self) -> Option<Deeplink> {
        self.current.lock().clone()
    }

    /// Read and clear in one step.
    pub fn take(&self) -> Option<Deeplink> {
        self.current.lock().take()
    }

    /// Clear the slot. Clearing an empty slot does nothing.
    pub fn refresh(&self) {
        if let Some(link) = self.current.lock().take() {
            debug!("Deeplink {} consumed", link);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.lock().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_refresh() {
        let slot = DeeplinkSlot::new();
        assert!(slot.is_empty());

        slot.store(Deeplink::Home);
        assert_eq!(slot.current(), Some(Deeplink::Home));
        assert!(!slot.is_empty());

        slot.refresh();
        assert!(slot.is_empty());
        slot.refresh();
        assert!(slot.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let slot = DeeplinkSlot::new();
        slot.store(Deeplink::Home);
        slot.store(Deeplink::Profile { id: "1".to_string() });
        assert_eq!(slot.take(), Some(Deeplink::Profile { id: "1".to_string() }));
        assert_eq!(slot.take(), None);
    }
}
