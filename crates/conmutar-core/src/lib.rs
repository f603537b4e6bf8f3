//! Core types and traits for the Conmutar switch widget.
//!
//! This crate provides the foundational types the widget crate builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] trait and the [`Canvas`] paint abstraction, with a
//!   [`RecordingCanvas`] implementation for tests

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget};
