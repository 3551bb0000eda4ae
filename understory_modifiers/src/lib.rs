// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Modifiers: chainable style presets for UI content.
//!
//! This crate is a small catalog of button and avatar styles (circles,
//! squares, capsules, and their stretch variants) expressed as plain
//! [`Modifiers`] values, plus a per-corner rounding clip built on
//! [`understory_rounded_corners`].
//!
//! - [`StylePreset`]: the catalog, one variant per named preset.
//! - [`ModifierExt`]: fluent methods available on every content value.
//! - [`Styled`]: content wrapped in one styling step.
//! - [`screen_size`] / [`DisplaySource`]: the display size of an injected host.
//!
//! ## Not a layout engine or renderer
//!
//! Presets only *describe* frame sizing, font, foreground, background, and
//! clip. Measuring text, blending materials, and resolving the accent and
//! label colors are the job of whatever consumes [`Modifiers`].
//! [`Frame::resolve`] and [`ClipShape::to_path`] turn the description into
//! numbers and paths for a given container offer and bounds.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Shape, Size};
//! use understory_modifiers::{
//!     Background, ClipShape, Corners, DEFAULT_CONTROL_SIZE, Material, ModifierExt,
//! };
//!
//! let button = "Play".circle_material_style(DEFAULT_CONTROL_SIZE);
//! let modifiers = button.modifiers();
//! assert_eq!(modifiers.background, Some(Background::Material(Material::Thin)));
//! assert_eq!(modifiers.clip, Some(ClipShape::Circle));
//! assert_eq!(
//!     button.layout_size(Size::new(390.0, 844.0), Size::new(30.0, 20.0)),
//!     Size::new(44.0, 44.0)
//! );
//!
//! // Round only the top corners of a sheet.
//! let sheet = "Details".corner_radius(16.0, Corners::TOP);
//! let clip = sheet
//!     .clip_path(Rect::new(0.0, 0.0, 390.0, 400.0), 0.1)
//!     .unwrap();
//! assert_eq!(clip.winding((0.5, 0.5).into()), 0);
//! assert_ne!(clip.winding((0.5, 399.5).into()), 0);
//! ```
//!
//! ## Out-of-range values
//!
//! Sizes and radii are not validated. A negative preset size produces a
//! negative fixed frame; corner radii are normalized only when a clip path is
//! built, following [`kurbo::RoundedRect`].
//!
//! This crate is `no_std`. Clip paths are `kurbo::BezPath` values and need `alloc`.

#![no_std]

mod display;
mod modifier;
mod preset;
mod styled;

pub use display::{DisplaySource, Headless, screen_size};
pub use modifier::{
    Background, ClipShape, Font, FontWeight, Foreground, Frame, Length, Material, Modifiers,
    SymbolRendering, TextStyle,
};
pub use preset::{DEFAULT_CONTROL_SIZE, SQUARE_CORNER_RADIUS, StylePreset};
pub use styled::{ModifierExt, Styled};
pub use understory_rounded_corners::{CornerMask, Corners};
