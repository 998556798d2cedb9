//! Scroll-driven background toggling for the navbar root.

use log::debug;

use crate::{
    dom::{Document, Element},
    page::nav::NAV_ID,
};

/// Vertical offset in pixels past which the navbar shrinks.
pub const SCROLL_THRESHOLD: f64 = 100.0;
pub const SHRINK_CLASSES: [&str; 2] = ["shrink", "bg-dark"];
pub const TRANSPARENT_CLASS: &str = "transparent";

lazy_static::lazy_static! {
    /// Browser-side reactor embedded in every served page.
    pub static ref SCROLL_SCRIPT: String = script();
}

/// Sets the class state of `root` for a vertical scroll `offset`.
pub fn apply_scroll_state(root: &mut Element, offset: f64) {
    if offset > SCROLL_THRESHOLD {
        for class in SHRINK_CLASSES {
            root.add_class(class);
        }
        root.remove_class(TRANSPARENT_CLASS);
    } else {
        root.add_class(TRANSPARENT_CLASS);
        for class in SHRINK_CLASSES {
            root.remove_class(class);
        }
    }
}

pub type ScrollListener = Box<dyn FnMut(f64, &mut Document)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The host window: tracks the scroll offset and dispatches scroll events.
#[derive(Default)]
pub struct Window {
    scroll_y:  f64,
    next_id:   u64,
    listeners: Vec<(ListenerId, ScrollListener)>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn add_scroll_listener(
        &mut self,
        listener: impl FnMut(f64, &mut Document) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was registered under `id`.
    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Moves the viewport and notifies every listener in registration order.
    pub fn scroll_to(&mut self, document: &mut Document, offset: f64) {
        self.scroll_y = offset;
        for (_, listener) in &mut self.listeners {
            listener(offset, &mut *document);
        }
    }
}

/// Hooks the navbar reactor onto `window`. Keep the id to [`deregister`] it.
pub fn register(window: &mut Window) -> ListenerId {
    window.add_scroll_listener(|offset, document| {
        match document.get_element_by_id_mut(NAV_ID) {
            Some(root) => apply_scroll_state(root, offset),
            None => debug!("No #{NAV_ID} element to update on scroll"),
        }
    })
}

pub fn deregister(window: &mut Window, id: ListenerId) -> bool {
    window.remove_scroll_listener(id)
}

/// JavaScript equivalent of [`register`] for pages rendered to a browser.
pub fn script() -> String {
    let shrink = SHRINK_CLASSES.map(|class| format!("'{class}'")).join(", ");
    format!(
        r#"(function () {{
  var nav = document.getElementById('{NAV_ID}');
  if (!nav) return;
  function onScroll() {{
    if (window.scrollY > {SCROLL_THRESHOLD}) {{
      nav.classList.add({shrink});
      nav.classList.remove('{TRANSPARENT_CLASS}');
    }} else {{
      nav.classList.add('{TRANSPARENT_CLASS}');
      nav.classList.remove({shrink});
    }}
  }}
  window.addEventListener('scroll', onScroll);
  onScroll();
}})();"#
    )
}
