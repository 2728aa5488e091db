use nalgebra::Vector2;
use vello::Scene;

use crate::app::context::{AppContext, UiEvent};
use crate::app::info::AppInfo;
use crate::app::tree::WidgetTree;
use crate::app::update::{Update, UpdateManager};
use crate::app::Screen;
use crate::config::{DisplayMetrics, FramedConfig};
use crate::error::{AppError, AppResult};
use crate::input::PointerEvent;
use crate::layout::LayoutNode;
use crate::menu::MenuItem;
use crate::vgi::vello_vg::VelloGraphics;

/// What a call to [FrameRunner::run_frame] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// A layout pass ran, so widgets were measured.
    pub laid_out: bool,
    /// The scene was re-rendered.
    pub drawn: bool,
}

/// Drives a [Screen] without a window: input, updates, layout and drawing into a [Scene].
pub struct FrameRunner<S: Screen> {
    screen: S,
    config: FramedConfig,
    context: AppContext,
    info: AppInfo,
    tree: WidgetTree,
    layout: Option<LayoutNode>,
    scene: Scene,
    menu: Vec<MenuItem>,
}

impl<S: Screen> FrameRunner<S> {
    /// Create the screen's widget tree and schedule the first full frame.
    pub fn new(config: FramedConfig, mut screen: S) -> AppResult<Self> {
        let update = UpdateManager::new();
        let context = AppContext::new(update.clone(), config.palette, config.display);

        log::info!("Creating screen '{}'", config.window.title);
        let tree = screen.on_create(&context).map_err(AppError::screen)?;
        let menu = screen.options_menu();

        let info = AppInfo {
            size: config.window.size,
            ..Default::default()
        };

        update.insert(Update::FORCE);

        Ok(Self {
            screen,
            config,
            context,
            info,
            tree,
            layout: None,
            scene: Scene::new(),
            menu,
        })
    }

    /// Queue a pointer event for the next frame.
    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.info.pointer_events.push(event);
    }

    /// Resize the window, forcing a full frame.
    pub fn resize(&mut self, size: Vector2<f64>) {
        log::debug!("Resizing to {}x{}", size.x, size.y);
        self.info.size = size;
        self.context.update().insert(Update::FORCE);
    }

    /// Move to a display with different metrics, forcing a full frame.
    pub fn set_display_metrics(&mut self, display: DisplayMetrics) {
        self.context.set_display(display);
        self.context.update().insert(Update::FORCE);
    }

    /// Run one frame and report which passes happened.
    pub fn run_frame(&mut self) -> AppResult<FrameReport> {
        let mut report = FrameReport::default();

        if let Some(layout) = &self.layout {
            for event in &self.info.pointer_events {
                self.tree.dispatch_pointer(event, layout, &self.context);
            }
        }

        for event in self.context.drain_events() {
            match event {
                UiEvent::Click { source } => {
                    log::debug!("Click from '{}'", source);
                    self.screen.on_click(&source, &mut self.tree, &self.context);
                },
            }
        }

        if let Some(layout) = &self.layout {
            let requested = self
                .tree
                .update(layout, self.context.clone(), &mut self.info);
            self.context.update().insert(requested);
        }

        let update = self.context.update().take();

        if self.layout.is_none() || update.intersects(Update::LAYOUT | Update::FORCE) {
            self.layout = Some(self.tree.compute_layout(self.info.size)?);
            report.laid_out = true;
        }

        if report.laid_out || update.intersects(Update::DRAW | Update::FORCE) {
            if let Some(layout) = &self.layout {
                self.scene.reset();
                let mut graphics = VelloGraphics::new(&mut self.scene);
                self.tree
                    .render(&mut graphics, layout, &mut self.info, self.context.clone());
                report.drawn = true;
            }
        }

        self.info.frame += 1;
        self.info.reset();

        Ok(report)
    }

    /// The screen being driven.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// The configuration the runner was created with.
    pub fn config(&self) -> &FramedConfig {
        &self.config
    }

    /// The screen's widgets.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// The screen's widgets, mutably.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    /// The shared application context.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// The scene of the last drawn frame.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The layout of the last layout pass.
    pub fn layout(&self) -> Option<&LayoutNode> {
        self.layout.as_ref()
    }

    /// The options menu of the screen.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.info.frame
    }
}
