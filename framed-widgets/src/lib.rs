#![warn(missing_docs)]

//! Widget library for framed => See `framed` crate.
//!
//! Contains the configurable [text_box::TextBox], a [button::Button] and the
//! layout resource [inflate::Inflater].

/// Contains the [text_box::TextBox] widget.
pub mod text_box;

/// Contains the [button::Button] widget.
pub mod button;

/// Contains the layout resource [inflate::Inflater].
pub mod inflate;
