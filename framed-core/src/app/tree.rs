use indexmap::IndexMap;
use nalgebra::Vector2;
use taffy::{AvailableSpace, NodeId, Size, TaffyTree};

use crate::app::context::AppContext;
use crate::app::info::AppInfo;
use crate::app::update::Update;
use crate::error::{AppError, AppResult};
use crate::input::PointerEvent;
use crate::layout::{
    AlignItems, Dimension, Display, FlexDirection, LayoutNode, MeasureSpec, Style,
};
use crate::vgi::Graphics;
use crate::widget::{BoxedWidget, Widget};

struct TreeEntry {
    widget: BoxedWidget,
    style: Style,
}

/// The widgets of a screen, stacked in a flex column and addressable by identifier.
///
/// Children are kept in insertion order, which is also the paint order.
pub struct WidgetTree {
    root_style: Style,
    widgets: IndexMap<String, TreeEntry>,
}

impl WidgetTree {
    /// Create an empty tree with a full-size, start-aligned column as root.
    pub fn new() -> Self {
        Self::with_root_style(Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            align_items: Some(AlignItems::Start),
            size: Size {
                width: Dimension::percent(1.0),
                height: Dimension::percent(1.0),
            },
            ..Default::default()
        })
    }

    /// Create an empty tree with a custom root style.
    pub fn with_root_style(root_style: Style) -> Self {
        Self {
            root_style,
            widgets: IndexMap::new(),
        }
    }

    /// Append a widget under the given identifier.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        widget: impl Widget,
        style: Style,
    ) -> AppResult<()> {
        self.insert_boxed(id, Box::new(widget), style)
    }

    /// Append an already boxed widget under the given identifier.
    pub fn insert_boxed(
        &mut self,
        id: impl Into<String>,
        widget: BoxedWidget,
        style: Style,
    ) -> AppResult<()> {
        let id = id.into();
        if self.widgets.contains_key(&id) {
            return Err(AppError::DuplicateId { id });
        }

        log::debug!("Adding widget {} as '{}'", widget.widget_id(), id);
        self.widgets.insert(id, TreeEntry { widget, style });
        Ok(())
    }

    /// The widget registered under `id`.
    pub fn get(&self, id: &str) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|entry| entry.widget.as_ref())
    }

    /// The widget registered under `id`, if it is a `T`.
    pub fn find<T: Widget>(&self, id: &str) -> Option<&T> {
        self.widgets.get(id)?.widget.as_any().downcast_ref::<T>()
    }

    /// The widget registered under `id`, mutably, if it is a `T`.
    pub fn find_mut<T: Widget>(&mut self, id: &str) -> Option<&mut T> {
        self.widgets
            .get_mut(id)?
            .widget
            .as_any_mut()
            .downcast_mut::<T>()
    }

    /// Have the widget registered under `id` report its clicks with `id` as source.
    ///
    /// Returns `false` if there is no such widget or it cannot be clicked.
    pub fn set_on_click_listener(&mut self, id: &str) -> bool {
        match self.widgets.get_mut(id) {
            Some(entry) => entry.widget.set_on_click_listener(id),
            None => false,
        }
    }

    /// The identifiers in paint order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    /// The number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns if the tree holds no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Lay out all widgets inside a window of the given size.
    ///
    /// Widgets without a definite size are measured through [Widget::measure];
    /// auto-sized axes are measured at most as large as the window.
    /// The returned node is the root; its children follow insertion order and
    /// carry absolute window coordinates.
    pub fn compute_layout(&self, size: Vector2<f64>) -> AppResult<LayoutNode> {
        let mut taffy: TaffyTree<usize> = TaffyTree::with_capacity(self.widgets.len() + 1);

        let mut children = Vec::with_capacity(self.widgets.len());
        for (index, entry) in self.widgets.values().enumerate() {
            children.push(taffy.new_leaf_with_context(entry.style.clone(), index)?);
        }
        let root = taffy.new_with_children(self.root_style.clone(), &children)?;

        taffy.compute_layout_with_measure(
            root,
            Size {
                width: AvailableSpace::Definite(size.x as f32),
                height: AvailableSpace::Definite(size.y as f32),
            },
            |known, available, _node, index, _style| {
                let Some(entry) = index.and_then(|index| self.widgets.get_index(*index)) else {
                    return Size::ZERO;
                };

                // Content sizing is bounded by the window, like definite space.
                let width =
                    MeasureSpec::from_taffy(known.width, available.width).or_at_most(size.x as f32);
                let height = MeasureSpec::from_taffy(known.height, available.height)
                    .or_at_most(size.y as f32);
                let measured = entry.1.widget.measure(width, height);

                Size {
                    width: measured.x,
                    height: measured.y,
                }
            },
        )?;

        let root_layout = collect_layout(&taffy, root, &children)?;
        log::info!(
            "Laid out {} widget(s) in {}x{}",
            root_layout.children.len(),
            size.x,
            size.y
        );

        Ok(root_layout)
    }

    /// Run [Widget::update] on every widget and merge the requested updates.
    pub fn update(&mut self, layout: &LayoutNode, context: AppContext, info: &mut AppInfo) -> Update {
        let mut update = Update::empty();

        for (entry, node) in self.widgets.values_mut().zip(&layout.children) {
            update |= entry.widget.update(node, context.clone(), info);
        }

        update
    }

    /// Render every widget into its committed layout, in insertion order.
    pub fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        layout: &LayoutNode,
        info: &mut AppInfo,
        context: AppContext,
    ) {
        for (entry, node) in self.widgets.values_mut().zip(&layout.children) {
            entry.widget.render(graphics, node, info, context.clone());
        }
    }

    /// Deliver a pointer event, front to back, until a widget consumes it.
    ///
    /// Positional events only reach widgets whose bounds contain the pointer;
    /// broadcast events are offered to every widget.
    pub fn dispatch_pointer(
        &mut self,
        event: &PointerEvent,
        layout: &LayoutNode,
        context: &AppContext,
    ) -> bool {
        let targets = self.widgets.values_mut().zip(&layout.children).rev();

        for (entry, node) in targets {
            if !event.is_broadcast() && !node.contains(event.position) {
                continue;
            }

            if entry.widget.on_pointer(event, node, context) {
                return true;
            }
        }

        false
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_layout(
    taffy: &TaffyTree<usize>,
    root: NodeId,
    children: &[NodeId],
) -> Result<LayoutNode, taffy::TaffyError> {
    let root_layout = *taffy.layout(root)?;
    let origin = root_layout.location;

    let mut nodes = Vec::with_capacity(children.len());
    for child in children {
        let mut layout = *taffy.layout(*child)?;
        layout.location.x += origin.x;
        layout.location.y += origin.y;

        nodes.push(LayoutNode {
            layout,
            children: Vec::new(),
        });
    }

    Ok(LayoutNode {
        layout: root_layout,
        children: nodes,
    })
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;

    use vello::kurbo::Point;

    use super::*;
    use crate::input::PointerAction;
    use crate::layout::MeasureMode;
    use framed_theme::id::WidgetId;

    struct Block {
        size: Vector2<f32>,
        consume: bool,
        hits: Rc<Cell<u32>>,
    }

    impl Block {
        fn new(width: f32, height: f32, consume: bool) -> Self {
            Self {
                size: Vector2::new(width, height),
                consume,
                hits: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Widget for Block {
        fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vector2<f32> {
            let pick = |spec: MeasureSpec, wanted: f32| match spec.mode {
                MeasureMode::Exactly => spec.size,
                MeasureMode::AtMost => wanted.min(spec.size),
                MeasureMode::Unspecified => wanted,
            };
            Vector2::new(pick(width, self.size.x), pick(height, self.size.y))
        }

        fn render(&mut self, _: &mut dyn Graphics, _: &LayoutNode, _: &mut AppInfo, _: AppContext) {}

        fn on_pointer(&mut self, _: &PointerEvent, _: &LayoutNode, _: &AppContext) -> bool {
            self.hits.set(self.hits.get() + 1);
            self.consume
        }

        fn widget_id(&self) -> WidgetId {
            WidgetId::new("framed-core", "Block")
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn fixed(width: f32, height: f32) -> Style {
        Style {
            size: Size {
                width: Dimension::length(width),
                height: Dimension::length(height),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut tree = WidgetTree::new();
        tree.insert("a", Block::new(10.0, 10.0, false), Style::default())
            .unwrap();

        let result = tree.insert("a", Block::new(10.0, 10.0, false), Style::default());
        assert!(matches!(result, Err(AppError::DuplicateId { id }) if id == "a"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_find_by_type() {
        let mut tree = WidgetTree::new();
        tree.insert("block", Block::new(10.0, 10.0, false), Style::default())
            .unwrap();

        assert!(tree.find::<Block>("block").is_some());
        assert!(tree.find_mut::<Block>("block").is_some());
        assert!(tree.find::<Block>("missing").is_none());
        assert!(!tree.set_on_click_listener("block"));
    }

    #[test]
    fn test_children_stack_vertically() {
        let mut tree = WidgetTree::new();
        tree.insert("top", Block::new(0.0, 0.0, false), fixed(100.0, 40.0))
            .unwrap();
        tree.insert("bottom", Block::new(0.0, 0.0, false), fixed(50.0, 30.0))
            .unwrap();

        let layout = tree.compute_layout(Vector2::new(360.0, 640.0)).unwrap();
        assert_eq!(layout.layout.size.width, 360.0);
        assert_eq!(layout.children.len(), 2);

        let bottom = &layout.children[1];
        assert_eq!(bottom.layout.location.y, 40.0);
        assert_eq!(bottom.layout.size.width, 50.0);
        assert_eq!(bottom.layout.size.height, 30.0);
    }

    #[test]
    fn test_match_parent_width_is_exact() {
        let mut tree = WidgetTree::new();
        let style = Style {
            size: Size {
                width: Dimension::percent(1.0),
                height: Dimension::length(20.0),
            },
            ..Default::default()
        };
        tree.insert("wide", Block::new(10.0, 10.0, false), style).unwrap();

        let layout = tree.compute_layout(Vector2::new(200.0, 100.0)).unwrap();
        assert_eq!(layout.children[0].layout.size.width, 200.0);
    }

    #[test]
    fn test_pointer_stops_at_first_consumer() {
        let mut tree = WidgetTree::new();
        let back = Block::new(0.0, 0.0, true);
        let back_hits = back.hits.clone();
        let front = Block::new(0.0, 0.0, true);
        let front_hits = front.hits.clone();

        tree.insert("back", back, fixed(100.0, 50.0)).unwrap();
        tree.insert("front", front, fixed(100.0, 50.0)).unwrap();

        let layout = tree.compute_layout(Vector2::new(100.0, 150.0)).unwrap();
        let context = AppContext::default();

        let down = PointerEvent::new(PointerAction::Down, Point::new(10.0, 60.0));
        assert!(tree.dispatch_pointer(&down, &layout, &context));
        assert_eq!(front_hits.get(), 1);
        assert_eq!(back_hits.get(), 0);

        let miss = PointerEvent::new(PointerAction::Down, Point::new(10.0, 120.0));
        assert!(!tree.dispatch_pointer(&miss, &layout, &context));

        let cancel = PointerEvent::new(PointerAction::Cancel, Point::new(500.0, 500.0));
        assert!(tree.dispatch_pointer(&cancel, &layout, &context));
        assert_eq!(front_hits.get(), 2);
    }
}
