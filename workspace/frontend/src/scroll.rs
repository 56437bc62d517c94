use common::Anchor;
use thiserror::Error;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::settings;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no document is available")]
    NoDocument,
    #[error("no element with id '{0}'")]
    TargetNotFound(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    #[default]
    Smooth,
    Instant,
}

/// Something that can bring an element into view by its DOM id.
pub trait Viewport {
    fn scroll_into_view(&self, id: &'static str, mode: ScrollMode) -> Result<(), ScrollError>;
}

/// The live browser window.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_into_view(&self, id: &'static str, mode: ScrollMode) -> Result<(), ScrollError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ScrollError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or(ScrollError::TargetNotFound(id))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Scrolls `anchor` into view. A missing target is skipped without error.
///
/// Returns whether a scroll was requested.
pub fn scroll_to(viewport: &impl Viewport, anchor: Anchor, mode: ScrollMode) -> bool {
    match viewport.scroll_into_view(anchor.id(), mode) {
        Ok(()) => {
            log::debug!("Scrolled to #{} ({:?})", anchor.id(), mode);
            true
        }
        Err(e) => {
            log::debug!("Skipping scroll to #{}: {}", anchor.id(), e);
            false
        }
    }
}

pub fn scroll_to_project() {
    scroll_to_anchor(&BrowserViewport, Anchor::Project);
}

pub fn scroll_to_contact() {
    scroll_to_anchor(&BrowserViewport, Anchor::Contact);
}

/// Scrolls `anchor` into view using the configured scroll mode.
pub(crate) fn scroll_to_anchor(viewport: &impl Viewport, anchor: Anchor) -> bool {
    let mode = settings::get_settings().scroll_mode();
    scroll_to(viewport, anchor, mode)
}

/// Viewport double that knows a fixed set of ids and records every scroll.
#[cfg(test)]
pub(crate) struct FakeViewport {
    present: Vec<&'static str>,
    pub(crate) scrolled: std::cell::RefCell<Vec<(&'static str, ScrollMode)>>,
}

#[cfg(test)]
impl FakeViewport {
    pub(crate) fn with(present: &[&'static str]) -> Self {
        Self {
            present: present.to_vec(),
            scrolled: std::cell::RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn scrolled_ids(&self) -> Vec<&'static str> {
        self.scrolled.borrow().iter().map(|(id, _)| *id).collect()
    }
}

#[cfg(test)]
impl Viewport for FakeViewport {
    fn scroll_into_view(&self, id: &'static str, mode: ScrollMode) -> Result<(), ScrollError> {
        if !self.present.contains(&id) {
            return Err(ScrollError::TargetNotFound(id));
        }
        self.scrolled.borrow_mut().push((id, mode));
        Ok(())
    }
}
