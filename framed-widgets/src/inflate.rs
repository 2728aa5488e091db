//! Layout resources: declarative widget trees in TOML.
//!
//! ```toml
//! [[widgets]]
//! kind = "TextBox"
//! id = "mycustomview"
//! width = "wrap_content"
//! height = 120.0
//!
//! [widgets.attributes]
//! text = "Marco"
//!
//! [[menu]]
//! id = "menu_settings"
//! title = "Settings"
//! ```
//!
//! `width` and `height` accept `"match_parent"`, `"wrap_content"` (the default) or a
//! number of density-independent units.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use framed_core::app::context::AppContext;
use framed_core::app::tree::WidgetTree;
use framed_core::attrs::AttributeSet;
use framed_core::error::AppError;
use framed_core::layout::{Dimension, Size, Style};
use framed_core::menu::MenuItem;
use framed_core::text_render::{TextMetrics, TextRenderContext};
use framed_core::widget::BoxedWidget;
use serde::Deserialize;
use thiserror::Error;

use crate::button::Button;
use crate::text_box::TextBox;

/// Errors raised while loading or inflating a layout resource.
#[derive(Error, Debug)]
pub enum InflateError {
    /// The resource file could not be read.
    #[error("Failed to read layout '{path}': {source}")]
    Io {
        /// The resource path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The resource is not a valid layout document.
    #[error("Failed to parse layout: {0}")]
    Parse(#[from] toml::de::Error),

    /// A widget kind has no constructor.
    #[error("Unknown widget kind '{kind}' for '{id}'")]
    UnknownWidget {
        /// The requested kind.
        kind: String,
        /// The identifier it was declared with.
        id: String,
    },

    /// Two widgets share an identifier.
    #[error("Widget id '{id}' is declared more than once")]
    DuplicateId {
        /// The offending identifier.
        id: String,
    },

    /// The host rejected the tree.
    #[error(transparent)]
    Host(AppError),
}

impl From<AppError> for InflateError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::DuplicateId { id } => Self::DuplicateId { id },
            other => Self::Host(other),
        }
    }
}

/// How a widget is sized along one axis.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(try_from = "RawSize")]
pub enum LayoutSize {
    /// Fill the parent.
    MatchParent,
    /// As large as the widget measures.
    #[default]
    WrapContent,
    /// A fixed size in density-independent units.
    Units(f32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSize {
    Number(f64),
    Name(String),
}

impl TryFrom<RawSize> for LayoutSize {
    type Error = String;

    fn try_from(raw: RawSize) -> Result<Self, Self::Error> {
        match raw {
            RawSize::Number(units) => Ok(Self::Units(units as f32)),
            RawSize::Name(name) => match name.as_str() {
                "match_parent" => Ok(Self::MatchParent),
                "wrap_content" => Ok(Self::WrapContent),
                other => Err(format!("unknown size '{}'", other)),
            },
        }
    }
}

impl LayoutSize {
    fn dimension(self, context: &AppContext) -> Dimension {
        match self {
            Self::MatchParent => Dimension::percent(1.0),
            Self::WrapContent => Dimension::auto(),
            Self::Units(units) => Dimension::length(context.display().scale(units)),
        }
    }
}

/// A widget declaration.
#[derive(Deserialize, Debug, Clone)]
pub struct WidgetDecl {
    /// The widget type, e.g. `"TextBox"`.
    pub kind: String,
    /// The identifier to look the widget up by.
    pub id: String,
    /// Horizontal sizing.
    #[serde(default)]
    pub width: LayoutSize,
    /// Vertical sizing.
    #[serde(default)]
    pub height: LayoutSize,
    /// Widget specific attributes.
    #[serde(default)]
    pub attributes: toml::Table,
}

/// A menu entry declaration.
#[derive(Deserialize, Debug, Clone)]
pub struct MenuDecl {
    /// Identifier reported back when chosen.
    pub id: String,
    /// Label.
    pub title: String,
}

/// A parsed layout resource.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LayoutResource {
    /// The widgets, top to bottom.
    #[serde(default)]
    pub widgets: Vec<WidgetDecl>,
    /// The options menu.
    #[serde(default)]
    pub menu: Vec<MenuDecl>,
}

impl LayoutResource {
    /// Parse a layout resource from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, InflateError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a layout resource file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InflateError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| InflateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }
}

/// The result of inflating a [LayoutResource].
pub struct InflatedLayout {
    /// The widgets.
    pub tree: WidgetTree,
    /// The options menu.
    pub menu: Vec<MenuItem>,
}

type MetricsFactory = Box<dyn Fn() -> Box<dyn TextMetrics>>;

fn shared_metrics<M: TextMetrics + 'static>(metrics: Rc<RefCell<M>>) -> MetricsFactory {
    Box::new(move || -> Box<dyn TextMetrics> { Box::new(metrics.clone()) })
}

/// Builds widget trees from layout resources.
pub struct Inflater<'a> {
    context: &'a AppContext,
    metrics: MetricsFactory,
}

impl<'a> Inflater<'a> {
    /// Create an inflater whose widgets render text with the system fonts.
    ///
    /// All widgets of one inflater share a single [TextRenderContext].
    pub fn new(context: &'a AppContext) -> Self {
        Self {
            context,
            metrics: shared_metrics(Rc::new(RefCell::new(TextRenderContext::new()))),
        }
    }

    /// Give every inflated widget text metrics from `factory`.
    pub fn with_text_metrics(mut self, factory: impl Fn() -> Box<dyn TextMetrics> + 'static) -> Self {
        self.metrics = Box::new(factory);
        self
    }

    /// Build the widgets and menu declared by `resource`.
    pub fn inflate(&self, resource: &LayoutResource) -> Result<InflatedLayout, InflateError> {
        let mut tree = WidgetTree::new();

        for decl in &resource.widgets {
            let widget = self.create(decl)?;
            let style = Style {
                size: Size {
                    width: decl.width.dimension(self.context),
                    height: decl.height.dimension(self.context),
                },
                ..Default::default()
            };

            tree.insert_boxed(decl.id.clone(), widget, style)?;
        }

        let menu = resource
            .menu
            .iter()
            .map(|item| MenuItem::new(item.id.clone(), item.title.clone()))
            .collect();

        log::info!(
            "Inflated {} widget(s) and {} menu item(s)",
            tree.len(),
            resource.menu.len()
        );

        Ok(InflatedLayout { tree, menu })
    }

    /// Parse and inflate a layout resource from TOML.
    pub fn inflate_str(&self, source: &str) -> Result<InflatedLayout, InflateError> {
        self.inflate(&LayoutResource::from_toml_str(source)?)
    }

    /// Read and inflate a layout resource file.
    pub fn inflate_file(&self, path: impl AsRef<Path>) -> Result<InflatedLayout, InflateError> {
        self.inflate(&LayoutResource::from_file(path)?)
    }

    fn create(&self, decl: &WidgetDecl) -> Result<BoxedWidget, InflateError> {
        let attrs = AttributeSet::from_toml(&decl.attributes);
        let metrics = (self.metrics)();

        match decl.kind.as_str() {
            "TextBox" => Ok(Box::new(TextBox::with_text_metrics(self.context, &attrs, metrics))),
            "Button" => Ok(Box::new(Button::with_text_metrics(self.context, &attrs, metrics))),
            _ => Err(InflateError::UnknownWidget {
                kind: decl.kind.clone(),
                id: decl.id.clone(),
            }),
        }
    }
}
