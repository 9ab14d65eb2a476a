//! Tab data structure

use uuid::Uuid;

/// One entry in the panel: a display title paired with an opaque content
/// pane.
///
/// The panel owns every tab exclusively; the redirection cache refers to
/// tabs by id only, never by a second handle to the pane.
#[derive(Debug)]
pub struct Tab<P> {
    /// Unique identifier, assigned when the tab is created
    id: String,
    /// Display title (not required to be unique across the panel)
    title: String,
    /// Content pane filling the tab's viewport
    pane: P,
}

impl<P> Tab<P> {
    pub(crate) fn new(title: String, pane: P) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            pane,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pane(&self) -> &P {
        &self.pane
    }

    pub fn pane_mut(&mut self) -> &mut P {
        &mut self.pane
    }

    /// Consume the tab and take back ownership of the pane.
    pub fn into_pane(self) -> P {
        self.pane
    }
}
