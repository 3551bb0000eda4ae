// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier descriptions: frame, font, colors, fills, and clip shapes.
//!
//! These are plain values. A renderer or layout pass reads them; nothing here
//! draws or measures text.

use kurbo::{BezPath, Circle, Rect, RoundedRect, Shape, Size};
use peniko::Color;
use understory_rounded_corners::{CornerMask, rounded_rect_path};

/// Sizing rule for one axis of a [`Frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Length {
    /// Use the content's ideal extent.
    #[default]
    Auto,
    /// Use exactly this extent, whatever the content or the container proposes.
    Fixed(f64),
    /// Expand to the extent the container makes available.
    Fill,
}

impl Length {
    /// Resolve this rule against the available and ideal extents of one axis.
    #[inline]
    pub fn resolve(self, available: f64, ideal: f64) -> f64 {
        match self {
            Self::Auto => ideal,
            Self::Fixed(extent) => extent,
            Self::Fill => available,
        }
    }
}

/// Per-axis frame sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    /// Horizontal sizing rule.
    pub width: Length,
    /// Vertical sizing rule.
    pub height: Length,
}

impl Frame {
    /// A frame that leaves both axes to the content.
    pub const AUTO: Self = Self::new(Length::Auto, Length::Auto);

    /// Create a frame from per-axis rules.
    #[inline]
    pub const fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// A fixed `width` × `height` frame.
    #[inline]
    pub const fn fixed(width: f64, height: f64) -> Self {
        Self::new(Length::Fixed(width), Length::Fixed(height))
    }

    /// A fixed `size` × `size` frame.
    #[inline]
    pub const fn square(size: f64) -> Self {
        Self::fixed(size, size)
    }

    /// Resolve the frame to a concrete size.
    ///
    /// `available` is what the container offers, `ideal` is what the content
    /// would like. Values are passed through unchanged: negative fixed
    /// extents are not clamped.
    pub fn resolve(&self, available: Size, ideal: Size) -> Size {
        Size::new(
            self.width.resolve(available.width, ideal.width),
            self.height.resolve(available.height, ideal.height),
        )
    }
}

/// Semantic text styles used by the presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Third-level title.
    Title3,
    /// Emphasized body-sized text.
    Headline,
}

/// Font weights used by the presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Semibold weight.
    Semibold,
}

/// A system font request: a semantic style with a weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Font {
    /// Semantic text style.
    pub style: TextStyle,
    /// Weight applied on top of the style.
    pub weight: FontWeight,
}

impl Font {
    /// A semibold system font in `style`.
    #[inline]
    pub const fn semibold(style: TextStyle) -> Self {
        Self {
            style,
            weight: FontWeight::Semibold,
        }
    }
}

/// How symbol images (icons) inside the content are colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolRendering {
    /// Every layer of the symbol uses the foreground color.
    Monochrome,
}

/// Foreground (text and icon) color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Foreground {
    /// The application's accent color.
    Accent,
    /// The platform's primary label color.
    Label,
    /// A concrete color.
    Color(Color),
}

impl Foreground {
    /// Resolve to a concrete color given the caller's accent and label colors.
    #[inline]
    pub fn resolve(self, accent: Color, label: Color) -> Color {
        match self {
            Self::Accent => accent,
            Self::Label => label,
            Self::Color(color) => color,
        }
    }
}

/// Translucent background materials, thinnest first.
///
/// A material blurs and tints whatever is behind the content; the blending
/// itself belongs to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    /// Most translucent.
    UltraThin,
    /// Translucent. Used by every material preset.
    Thin,
    /// Balanced translucency.
    Regular,
    /// Mostly opaque.
    Thick,
    /// Least translucent.
    UltraThick,
    /// The material of system toolbars and tab bars.
    Bar,
}

/// Background fill behind the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    /// An opaque (or caller-chosen alpha) color.
    Color(Color),
    /// A translucent material.
    Material(Material),
}

impl Background {
    /// Returns true for translucent material fills.
    #[inline]
    pub fn is_material(&self) -> bool {
        matches!(self, Self::Material(_))
    }
}

/// Shape used to clip the styled content to its bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipShape {
    /// The circle inscribed in the bounds, centered.
    Circle,
    /// A stadium: both short-axis ends fully rounded.
    Capsule,
    /// A rectangle with the same radius on all four corners.
    RoundedRect {
        /// Corner radius.
        radius: f64,
    },
    /// A rectangle with only the masked corners rounded.
    Corners(CornerMask),
}

impl ClipShape {
    /// Build the clip region for content laid out in `bounds`.
    pub fn to_path(&self, bounds: Rect, tolerance: f64) -> BezPath {
        match *self {
            Self::Circle => {
                let radius = bounds.width().abs().min(bounds.height().abs()) / 2.0;
                Circle::new(bounds.center(), radius).to_path(tolerance)
            }
            Self::Capsule => {
                let radius = bounds.width().abs().min(bounds.height().abs()) / 2.0;
                RoundedRect::from_rect(bounds, radius).to_path(tolerance)
            }
            Self::RoundedRect { radius } => {
                rounded_rect_path(&RoundedRect::from_rect(bounds, radius), tolerance)
            }
            Self::Corners(mask) => mask.to_path(bounds, tolerance),
        }
    }
}

/// The full set of modifiers one styling step applies.
///
/// Fields left as `None` (or [`Frame::AUTO`]) inherit whatever the wrapped
/// content already has.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Modifiers {
    /// Frame sizing.
    pub frame: Frame,
    /// Font for text inside the content.
    pub font: Option<Font>,
    /// Rendering mode for symbol images.
    pub symbol_rendering: Option<SymbolRendering>,
    /// Text and icon color.
    pub foreground: Option<Foreground>,
    /// Fill behind the content.
    pub background: Option<Background>,
    /// Clip applied after the background.
    pub clip: Option<ClipShape>,
}

impl Modifiers {
    /// Modifiers that change nothing.
    pub const NONE: Self = Self {
        frame: Frame::AUTO,
        font: None,
        symbol_rendering: None,
        foreground: None,
        background: None,
        clip: None,
    };

    /// Modifiers that only clip.
    #[inline]
    pub const fn clip(shape: ClipShape) -> Self {
        Self {
            clip: Some(shape),
            ..Self::NONE
        }
    }
}
