use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use framed_theme::palette::Palette;

use crate::app::update::UpdateManager;
use crate::config::DisplayMetrics;

/// An event posted by a widget for the host screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A clickable widget was clicked.
    Click {
        /// The identifier the click listener was registered with.
        source: String,
    },
}

/// The application context for managing the application lifecycle.
///
/// Cloning is cheap; all clones share the same state.
#[derive(Clone)]
pub struct AppContext {
    update: UpdateManager,
    palette: Arc<Palette>,
    display: Arc<ArcSwap<DisplayMetrics>>,
    events: Arc<Mutex<VecDeque<UiEvent>>>,
}

impl AppContext {
    /// Create a new application context using the given [UpdateManager].
    pub fn new(update: UpdateManager, palette: Palette, display: DisplayMetrics) -> Self {
        Self {
            update,
            palette: Arc::new(palette),
            display: Arc::new(ArcSwap::from_pointee(display)),
            events: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Get the [UpdateManager] to request layout or paint passes.
    pub fn update(&self) -> &UpdateManager {
        &self.update
    }

    /// Get the palette with the default colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The current display metrics.
    pub fn display(&self) -> DisplayMetrics {
        **self.display.load()
    }

    /// Replace the display metrics, e.g. when the window moves to another screen.
    pub fn set_display(&self, display: DisplayMetrics) {
        log::info!("Display density changed to {}", display.density);
        self.display.store(Arc::new(display));
    }

    /// Post an event for the host screen.
    pub fn post(&self, event: UiEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push_back(event);
        }
    }

    /// Take all posted events, oldest first.
    pub fn drain_events(&self) -> Vec<UiEvent> {
        match self.events.lock() {
            Ok(mut events) => events.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(UpdateManager::new(), Palette::default(), DisplayMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_shared_between_clones() {
        let context = AppContext::default();
        let clone = context.clone();

        clone.set_display(DisplayMetrics::new(3.0));
        assert_eq!(context.display().density, 3.0);
    }

    #[test]
    fn test_events_drain_in_order() {
        let context = AppContext::default();
        context.post(UiEvent::Click { source: "a".to_string() });
        context.post(UiEvent::Click { source: "b".to_string() });

        let events = context.drain_events();
        assert_eq!(
            events,
            vec![
                UiEvent::Click { source: "a".to_string() },
                UiEvent::Click { source: "b".to_string() },
            ]
        );
        assert!(context.drain_events().is_empty());
    }
}
