#![warn(missing_docs)]

//! # framed Theming
//!
//! Colors and the default palette shared by framed widgets.
//!
//! - **[WidgetId](id::WidgetId)**: identifies a widget type
//! - **[Palette](palette::Palette)**: the default colors widgets fall back to
//! - **[color]**: hex / packed-integer color parsing and serde helpers
//!
//! ```rust
//! use framed_theme::palette::Palette;
//!
//! let palette = Palette::default();
//! assert_eq!(palette.border.to_rgba8().b, 255);
//! ```

/// Contains the [WidgetId](id::WidgetId) type.
pub mod id;

/// Contains color parsing and serialization helpers.
pub mod color;

/// Contains the [Palette](palette::Palette) struct.
pub mod palette;

/// Contains the [ThemeError](error::ThemeError) type.
pub mod error;
