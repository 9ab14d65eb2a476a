//! Pointer input for the tab strip
//!
//! The host toolkit owns event dispatch. It maps its native mouse events
//! onto [`PointerEvent`] and forwards the ones landing on the tab strip;
//! [`resolve_gesture`] decides which of them mean anything to the panel.

/// Physical pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Any additional button, by hardware number
    Other(u16),
}

/// A pointer event delivered to the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Pressed(PointerButton),
    Released(PointerButton),
}

/// Panel action a pointer gesture resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    /// Close the currently selected tab
    CloseSelected,
}

/// Resolve a tab strip pointer event into a panel action.
///
/// Only a middle-button release closes tabs. Presses and the other buttons
/// resolve to nothing; in particular, left-click selection stays the host
/// toolkit's default behavior and never reaches the panel through here.
pub fn resolve_gesture(event: &PointerEvent) -> Option<GestureAction> {
    match event {
        PointerEvent::Released(PointerButton::Middle) => Some(GestureAction::CloseSelected),
        _ => None,
    }
}
