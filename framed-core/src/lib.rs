#![warn(missing_docs)]

//! Core library for framed => See `framed` crate.
//!
//! Contains the headless host, the widget trait and the drawing abstractions.

pub use vello as vg;

/// Contains app functionality.
pub mod app;

/// Contains the declarative [AttributeSet](attrs::AttributeSet).
pub mod attrs;

/// Contains the [FramedConfig](config::FramedConfig) struct.
pub mod config;

/// Contains the [AppError](error::AppError) type.
pub mod error;

/// Contains pointer input types.
pub mod input;

/// Contains useful types and functions for layout interaction.
pub mod layout;

/// Contains the [MenuItem](menu::MenuItem) type.
pub mod menu;

/// Contains text measurement and rendering using Parley.
pub mod text_render;

/// Contains the vector graphics interface abstraction.
pub mod vgi;

/// Contains the core widget functionalities.
pub mod widget;
