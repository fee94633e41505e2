//! Ordered document tabs with a reserved trailing sentinel slot

use super::{Tab, TabSlot};
use crate::view::TabHandle;

/// Tracks the open document tabs in display order.
///
/// The sentinel always occupies the slot after the last document tab, so its
/// position equals the number of document tabs. The only way in is
/// [`TabManager::insert_before_sentinel`].
#[derive(Debug, Default)]
pub struct TabManager {
    /// Document tabs in display order, sentinel excluded
    tabs: Vec<Tab>,
    /// Handle of the sentinel tab once the view has created it
    sentinel: Option<TabHandle>,
    /// Currently focused tab
    active: Option<TabHandle>,
}

impl TabManager {
    /// Create a manager with no tabs and no sentinel yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the handle of the sentinel tab created by the view.
    pub fn attach_sentinel(&mut self, handle: TabHandle) {
        self.sentinel = Some(handle);
        log::debug!("Attached sentinel tab {:?}", handle);
    }

    pub fn sentinel(&self) -> Option<TabHandle> {
        self.sentinel
    }

    /// Index the sentinel occupies in the rendered ordering.
    pub fn sentinel_position(&self) -> usize {
        self.tabs.len()
    }

    /// Insert `tab` immediately before the sentinel and return its index.
    ///
    /// A tab for a document that is already open is not inserted twice; the
    /// existing index is returned instead.
    pub fn insert_before_sentinel(&mut self, tab: Tab) -> usize {
        if let Some(existing) = self.position_of(tab.document.as_str()) {
            log::warn!(
                "Tab for {} already open at index {}, not inserting",
                tab.document,
                existing
            );
            return existing;
        }
        let index = self.sentinel_position();
        log::info!(
            "Inserted tab {} at index {} (total: {})",
            tab.document,
            index,
            index + 1
        );
        self.tabs.push(tab);
        index
    }

    /// Index of the tab showing `document`, if open
    pub fn position_of(&self, document: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.document.as_str() == document)
    }

    /// The tab showing `document`, if open
    pub fn find(&self, document: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.document.as_str() == document)
    }

    /// Resolve a rendered index, sentinel included, to its slot.
    pub fn slot_at(&self, index: usize) -> Option<TabSlot> {
        match self.tabs.get(index) {
            Some(tab) => Some(TabSlot::Document {
                handle: tab.handle,
                document: tab.document.clone(),
            }),
            None if index == self.sentinel_position() && self.sentinel.is_some() => {
                Some(TabSlot::Sentinel)
            }
            None => None,
        }
    }

    /// The full rendered ordering, ending with the sentinel.
    pub fn slots(&self) -> Vec<TabSlot> {
        let mut slots: Vec<TabSlot> = self
            .tabs
            .iter()
            .map(|tab| TabSlot::Document {
                handle: tab.handle,
                document: tab.document.clone(),
            })
            .collect();
        if self.sentinel.is_some() {
            slots.push(TabSlot::Sentinel);
        }
        slots
    }

    /// Document tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of document tabs (sentinel excluded)
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Number of tabs the view shows, sentinel included
    pub fn ui_tab_count(&self) -> usize {
        self.tabs.len() + usize::from(self.sentinel.is_some())
    }

    /// Record that `handle` now has focus.
    pub fn set_active(&mut self, handle: TabHandle) {
        self.active = Some(handle);
        log::debug!("Switched to tab {:?}", handle);
    }

    pub fn active(&self) -> Option<TabHandle> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentId;
    use std::path::PathBuf;

    fn tab(handle: u64, name: &str) -> Tab {
        Tab::new(
            TabHandle(handle),
            DocumentId::new(name).unwrap(),
            PathBuf::from(format!("/flows/{name}")),
        )
    }

    fn with_sentinel() -> TabManager {
        let mut manager = TabManager::new();
        manager.attach_sentinel(TabHandle(0));
        manager
    }

    #[test]
    fn test_new_manager_has_only_sentinel() {
        let manager = with_sentinel();
        assert_eq!(manager.len(), 0);
        assert_eq!(manager.ui_tab_count(), 1);
        assert_eq!(manager.sentinel_position(), 0);
        assert_eq!(manager.slots(), vec![TabSlot::Sentinel]);
    }

    #[test]
    fn test_insert_keeps_sentinel_last() {
        let mut manager = with_sentinel();
        assert_eq!(manager.insert_before_sentinel(tab(1, "a.wkfw")), 0);
        assert_eq!(manager.insert_before_sentinel(tab(2, "b.wkfw")), 1);

        assert_eq!(manager.sentinel_position(), 2);
        let slots = manager.slots();
        assert_eq!(slots.len(), 3);
        assert!(slots[2].is_sentinel());
        assert_eq!(manager.slot_at(2), Some(TabSlot::Sentinel));
        assert_eq!(manager.slot_at(3), None);
    }

    #[test]
    fn test_duplicate_document_not_inserted() {
        let mut manager = with_sentinel();
        manager.insert_before_sentinel(tab(1, "a.wkfw"));
        assert_eq!(manager.insert_before_sentinel(tab(9, "a.wkfw")), 0);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.find("a.wkfw").unwrap().handle, TabHandle(1));
    }

    #[test]
    fn test_slot_at_resolves_documents() {
        let mut manager = with_sentinel();
        manager.insert_before_sentinel(tab(1, "a.wkfw"));
        assert_eq!(
            manager.slot_at(0),
            Some(TabSlot::Document {
                handle: TabHandle(1),
                document: DocumentId::new("a.wkfw").unwrap(),
            })
        );
    }

    #[test]
    fn test_active_follows_last_switch() {
        let mut manager = with_sentinel();
        assert_eq!(manager.active(), None);
        manager.insert_before_sentinel(tab(1, "a.wkfw"));
        manager.insert_before_sentinel(tab(2, "b.wkfw"));

        manager.set_active(TabHandle(2));
        manager.set_active(TabHandle(1));
        assert_eq!(manager.active(), Some(TabHandle(1)));
        assert_eq!(manager.find("a.wkfw").unwrap().handle, TabHandle(1));
    }

    #[test]
    fn test_no_sentinel_slot_before_attach() {
        let manager = TabManager::new();
        assert_eq!(manager.slot_at(0), None);
        assert!(manager.slots().is_empty());
    }
}
