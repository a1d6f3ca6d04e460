//! Lightbox viewer state machine
//!
//! Transitions are pure (`state + event -> state`). [`Lightbox`] wraps the
//! state with the side effects tied to being open: the page scroll lock and
//! the lightbox key scope.

use crate::catalog::ImageName;
use crate::command::KeyScope;
use crate::scroll_lock::{PageScroll, ScrollGuard};

/// Input to the lightbox state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    /// A gallery tile was selected; `images` is the visible set at that moment
    Open { images: Vec<ImageName>, index: usize },
    Next,
    Prev,
    Close,
}

/// Lightbox state
///
/// While `Open`, `images` is non-empty and `index < images.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { images: Vec<ImageName>, index: usize },
}

impl LightboxState {
    /// Apply one event
    ///
    /// Opening on an empty list or an out-of-range index is refused. Next and
    /// Prev wrap around and do nothing with fewer than two images.
    pub fn apply(self, event: LightboxEvent) -> Self {
        match (self, event) {
            (_, LightboxEvent::Close) => LightboxState::Closed,

            (LightboxState::Closed, LightboxEvent::Open { images, index }) => {
                if index < images.len() {
                    LightboxState::Open { images, index }
                } else {
                    LightboxState::Closed
                }
            }

            (LightboxState::Open { images, index }, LightboxEvent::Next) if images.len() > 1 => {
                let index = (index + 1) % images.len();
                LightboxState::Open { images, index }
            }

            (LightboxState::Open { images, index }, LightboxEvent::Prev) if images.len() > 1 => {
                let len = images.len();
                let index = (index + len - 1) % len;
                LightboxState::Open { images, index }
            }

            // Already open: a second Open is ignored, like Next/Prev on a
            // single image or anything but Close/Open while closed.
            (state, _) => state,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    /// Prev/Next are available
    pub fn can_navigate(&self) -> bool {
        matches!(self, LightboxState::Open { images, .. } if images.len() > 1)
    }

    pub fn current(&self) -> Option<&ImageName> {
        match self {
            LightboxState::Open { images, index } => images.get(*index),
            LightboxState::Closed => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            LightboxState::Open { index, .. } => Some(*index),
            LightboxState::Closed => None,
        }
    }

    pub fn images(&self) -> &[ImageName] {
        match self {
            LightboxState::Open { images, .. } => images,
            LightboxState::Closed => &[],
        }
    }
}

/// Lightbox controller owned by the page
///
/// Holds the scroll guard for exactly as long as the state is `Open`.
/// Dropping the controller while open releases it too.
#[derive(Debug)]
pub struct Lightbox {
    state: LightboxState,
    scroll: PageScroll,
    scroll_guard: Option<ScrollGuard>,
}

impl Lightbox {
    pub fn new(scroll: PageScroll) -> Self {
        Self {
            state: LightboxState::Closed,
            scroll,
            scroll_guard: None,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    /// Feed an event; returns `true` if the state changed
    pub fn dispatch(&mut self, event: LightboxEvent) -> bool {
        let before = std::mem::take(&mut self.state);
        let was_open = before.is_open();
        let old_index = before.index();
        let after = before.apply(event);

        let changed = was_open != after.is_open() || old_index != after.index();

        match (was_open, after.is_open()) {
            (false, true) => {
                self.scroll_guard = Some(self.scroll.lock());
                tracing::debug!(
                    count = after.images().len(),
                    index = ?after.index(),
                    "Lightbox opened"
                );
            }
            (true, false) => {
                self.scroll_guard = None;
                tracing::debug!("Lightbox closed");
            }
            _ => {}
        }

        self.state = after;
        changed
    }

    /// Key scope the page should bind while this lightbox is in its state
    pub fn key_scope(&self) -> KeyScope {
        if self.state.is_open() {
            KeyScope::Lightbox {
                navigation: self.state.can_navigate(),
            }
        } else {
            KeyScope::Page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<ImageName> {
        list.iter().map(|n| ImageName::from(*n)).collect()
    }

    fn open(list: &[&str], index: usize) -> LightboxState {
        LightboxState::Closed.apply(LightboxEvent::Open {
            images: names(list),
            index,
        })
    }

    #[test]
    fn test_next_wraps() {
        let mut state = open(&["a", "b", "c"], 0);
        let mut seen = Vec::new();
        for _ in 0..3 {
            state = state.apply(LightboxEvent::Next);
            seen.push(state.index().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let state = open(&["a", "b", "c"], 0).apply(LightboxEvent::Prev);
        assert_eq!(state.index(), Some(2));
        assert_eq!(state.current(), Some(&ImageName::from("c")));
    }

    #[test]
    fn test_open_at_b_then_right_twice_shows_a() {
        let state = open(&["A", "B", "C"], 1)
            .apply(LightboxEvent::Next)
            .apply(LightboxEvent::Next);
        assert_eq!(state.current(), Some(&ImageName::from("A")));
    }

    #[test]
    fn test_single_image_only_closes() {
        let state = open(&["solo"], 0);
        assert!(!state.can_navigate());
        let state = state.apply(LightboxEvent::Next).apply(LightboxEvent::Prev);
        assert_eq!(state.index(), Some(0));
        assert_eq!(state.apply(LightboxEvent::Close), LightboxState::Closed);
    }

    #[test]
    fn test_open_refuses_empty_or_out_of_range() {
        assert_eq!(open(&[], 0), LightboxState::Closed);
        assert_eq!(open(&["a", "b"], 2), LightboxState::Closed);
    }

    #[test]
    fn test_closed_ignores_navigation() {
        let state = LightboxState::Closed
            .apply(LightboxEvent::Next)
            .apply(LightboxEvent::Prev)
            .apply(LightboxEvent::Close);
        assert_eq!(state, LightboxState::Closed);
        assert!(state.images().is_empty());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_snapshot_is_not_replaced_while_open() {
        let state = open(&["a", "b"], 1).apply(LightboxEvent::Open {
            images: names(&["x"]),
            index: 0,
        });
        assert_eq!(state.images(), names(&["a", "b"]).as_slice());
        assert_eq!(state.index(), Some(1));
    }

    #[test]
    fn test_controller_holds_scroll_lock_while_open() {
        let scroll = PageScroll::new();
        let mut lightbox = Lightbox::new(scroll.clone());
        assert_eq!(lightbox.key_scope(), KeyScope::Page);

        assert!(lightbox.dispatch(LightboxEvent::Open {
            images: names(&["a", "b", "c"]),
            index: 1,
        }));
        assert!(!scroll.is_enabled());
        assert_eq!(lightbox.key_scope(), KeyScope::Lightbox { navigation: true });

        assert!(lightbox.dispatch(LightboxEvent::Next));
        assert!(!scroll.is_enabled());

        assert!(lightbox.dispatch(LightboxEvent::Close));
        assert!(scroll.is_enabled());
        assert_eq!(lightbox.key_scope(), KeyScope::Page);
        assert!(!lightbox.dispatch(LightboxEvent::Close));
    }

    #[test]
    fn test_controller_single_image_scope() {
        let mut lightbox = Lightbox::new(PageScroll::new());
        lightbox.dispatch(LightboxEvent::Open {
            images: names(&["solo"]),
            index: 0,
        });
        assert_eq!(lightbox.key_scope(), KeyScope::Lightbox { navigation: false });
        assert!(!lightbox.dispatch(LightboxEvent::Next));
    }

    #[test]
    fn test_dropping_open_controller_restores_scroll() {
        let scroll = PageScroll::new();
        {
            let mut lightbox = Lightbox::new(scroll.clone());
            lightbox.dispatch(LightboxEvent::Open {
                images: names(&["a"]),
                index: 0,
            });
            assert!(!scroll.is_enabled());
        }
        assert!(scroll.is_enabled());
    }

    #[test]
    fn test_refused_open_does_not_lock() {
        let scroll = PageScroll::new();
        let mut lightbox = Lightbox::new(scroll.clone());
        assert!(!lightbox.dispatch(LightboxEvent::Open {
            images: Vec::new(),
            index: 0,
        }));
        assert!(scroll.is_enabled());
    }
}
