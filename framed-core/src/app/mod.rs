//! The application host: context, widget tree and the frame loop.

use std::error::Error;

use crate::app::context::AppContext;
use crate::app::tree::WidgetTree;
use crate::menu::MenuItem;

/// Contains the [AppContext] shared with all widgets.
pub mod context;

/// Contains the [AppInfo](info::AppInfo) per-frame input container.
pub mod info;

/// Contains the [FrameRunner](runner::FrameRunner) host loop.
pub mod runner;

/// Contains the [WidgetTree].
pub mod tree;

/// Contains the [Update](update::Update) flags and their manager.
pub mod update;

/// A screen of the application: builds the widget tree and reacts to its events.
pub trait Screen {
    /// Build the widget tree. Called once, before the first frame.
    fn on_create(&mut self, context: &AppContext) -> Result<WidgetTree, Box<dyn Error + Send + Sync>>;

    /// A widget registered with [WidgetTree::set_on_click_listener] was clicked.
    fn on_click(&mut self, _source: &str, _tree: &mut WidgetTree, _context: &AppContext) {}

    /// The items of the screen's options menu.
    fn options_menu(&self) -> Vec<MenuItem> {
        Vec::new()
    }
}
