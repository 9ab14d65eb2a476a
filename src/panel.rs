//! Tabbed panel
//!
//! Manages the ordered tab list and the title redirection cache. The order
//! vector is the source of truth for membership and display index; the two
//! cache maps are a secondary index over it, mirrored at all times (at most
//! one live entry per title) and mutated only together.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::TabPanelError;
use crate::input::{resolve_gesture, GestureAction, PointerEvent};
use crate::policy::{CachePolicy, MarkerPolicy};
use crate::tab::Tab;
use crate::Result;

/// Host-facing summary of one tab, for shells that mirror the tab strip
/// elsewhere.
#[derive(Debug, Clone, Serialize)]
pub struct TabInfo {
    pub id: String,
    pub title: String,
    pub index: usize,
    pub cached: bool,
    pub selected: bool,
}

pub struct TabPanel<P> {
    /// Owning store, id -> tab
    tabs: HashMap<String, Tab<P>>,
    /// Display order of tab ids
    order: Vec<String>,
    /// Selected display index, `None` only while the panel is empty
    selected: Option<usize>,
    /// Redirection cache: cacheable title -> tab id
    title_to_tab: HashMap<String, String>,
    /// Reverse cache: tab id -> cacheable title
    tab_to_title: HashMap<String, String>,
    policy: Box<dyn CachePolicy>,
}

impl<P> TabPanel<P> {
    /// Empty panel with the default marker policy.
    pub fn new() -> Self {
        Self::with_policy(MarkerPolicy::default())
    }

    /// Empty panel with an injected cacheability policy.
    pub fn with_policy(policy: impl CachePolicy + 'static) -> Self {
        Self {
            tabs: HashMap::new(),
            order: Vec::new(),
            selected: None,
            title_to_tab: HashMap::new(),
            tab_to_title: HashMap::new(),
            policy: Box::new(policy),
        }
    }

    /// Add a tab at the end of the visual order.
    ///
    /// If the policy accepts the title, the tab is registered in the
    /// redirection cache, last write wins. There is no dedup check here;
    /// callers that want reuse instead of a duplicate tab check
    /// [`has_cached`](Self::has_cached) first. The first tab added becomes
    /// selected; later adds leave the selection untouched.
    pub fn add_tab(&mut self, title: impl Into<String>, pane: P) -> &Tab<P> {
        let tab = Tab::new(title.into(), pane);
        let id = tab.id().to_string();

        self.order.push(id.clone());
        if self.selected.is_none() {
            self.selected = Some(0);
        }

        if self.policy.should_cache(tab.title()) {
            self.register_cached(tab.title(), &id);
        }

        tracing::debug!(tab_id = %id, title = %tab.title(), "Added tab");

        self.tabs.entry(id).or_insert(tab)
    }

    /// Look up a cached tab's pane by title.
    ///
    /// Cache lookup only; titles that were never cached, or whose tab has
    /// since been closed, yield `None`. The live tab list is not scanned.
    pub fn get_child(&self, title: &str) -> Option<&P> {
        let id = self.title_to_tab.get(title)?;
        self.tabs.get(id).map(Tab::pane)
    }

    /// Mutable variant of [`get_child`](Self::get_child).
    pub fn get_child_mut(&mut self, title: &str) -> Option<&mut P> {
        let id = self.title_to_tab.get(title)?;
        self.tabs.get_mut(id).map(Tab::pane_mut)
    }

    /// Whether a tab by the given title exists and is available for
    /// redirection.
    pub fn has_cached(&self, title: &str) -> bool {
        self.title_to_tab.contains_key(title)
    }

    /// Display index of the cached tab with the given title.
    ///
    /// Re-derived from the live order on every call rather than stored, so
    /// the answer stays correct after unrelated tabs are closed.
    pub fn cached_index(&self, title: &str) -> Option<usize> {
        self.order
            .iter()
            .position(|id| self.tab_to_title.get(id).is_some_and(|t| t == title))
    }

    /// Number of open tabs.
    pub fn tab_count(&self) -> usize {
        self.order.len()
    }

    /// Selected display index, `None` while the panel is empty.
    pub fn selected_tab(&self) -> Option<usize> {
        self.selected
    }

    /// Title of the tab at the given display index.
    pub fn title_at(&self, index: usize) -> Result<&str> {
        self.order
            .get(index)
            .and_then(|id| self.tabs.get(id))
            .map(Tab::title)
            .ok_or(TabPanelError::IndexOutOfBounds {
                index,
                count: self.order.len(),
            })
    }

    /// Select the tab at the given display index.
    pub fn set_selected_tab(&mut self, index: usize) -> Result<()> {
        if index >= self.order.len() {
            return Err(TabPanelError::IndexOutOfBounds {
                index,
                count: self.order.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Summaries of all tabs in display order.
    pub fn tabs(&self) -> Vec<TabInfo> {
        self.order
            .iter()
            .enumerate()
            .map(|(index, id)| TabInfo {
                id: id.clone(),
                title: self
                    .tabs
                    .get(id)
                    .map(|t| t.title().to_string())
                    .unwrap_or_default(),
                index,
                cached: self.tab_to_title.contains_key(id),
                selected: self.selected == Some(index),
            })
            .collect()
    }

    /// Feed a tab strip pointer event to the panel.
    ///
    /// Returns the closed tab when the event resolved to a close, so the
    /// host can reclaim the pane or just drop it. All other events are
    /// ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Tab<P>> {
        match resolve_gesture(&event)? {
            GestureAction::CloseSelected => self.close_selected(),
        }
    }

    /// Close the currently selected tab, evicting its cache entry if it has
    /// one. No-op on an empty panel.
    pub fn close_selected(&mut self) -> Option<Tab<P>> {
        let index = self.selected?;
        let id = self.order.remove(index);

        // Never-cached tabs simply have no reverse entry to evict.
        if let Some(title) = self.tab_to_title.remove(&id) {
            self.title_to_tab.remove(&title);
            tracing::debug!(tab_id = %id, title = %title, "Evicted cached title");
        }

        self.selected = if self.order.is_empty() {
            None
        } else {
            Some(index.min(self.order.len() - 1))
        };

        tracing::debug!(tab_id = %id, "Closed tab");

        self.tabs.remove(&id)
    }

    /// Register a title -> tab association, keeping the two cache maps
    /// mirrored.
    fn register_cached(&mut self, title: &str, id: &str) {
        // Last write wins; the stale reverse entry goes with it so the maps
        // never disagree.
        if let Some(stale) = self.title_to_tab.insert(title.to_string(), id.to_string()) {
            self.tab_to_title.remove(&stale);
            tracing::debug!(title = %title, stale_tab = %stale, "Rebound cached title");
        }
        self.tab_to_title.insert(id.to_string(), title.to_string());
    }
}

impl<P> Default for TabPanel<P> {
    fn default() -> Self {
        Self::new()
    }
}
