//! Tabbed panel state
//!
//! Wrapper-level state for a tabbed container, providing extra abilities
//! beyond what a plain tab strip gives: tab removal on a middle-button
//! release, and title-based redirection so that singleton tabs (error
//! reports, search results) are reused instead of duplicated.
//!
//! The crate is toolkit-agnostic. The host UI owns rendering and event
//! dispatch; it forwards tab strip pointer events via
//! [`TabPanel::handle_pointer`] and maps its own mouse events onto
//! [`PointerEvent`].

mod error;
mod input;
mod panel;
mod policy;
mod tab;

pub use error::TabPanelError;
pub use input::{resolve_gesture, GestureAction, PointerButton, PointerEvent};
pub use panel::{TabInfo, TabPanel};
pub use policy::{CachePolicy, MarkerPolicy};
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabPanelError>;
