// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled content and the fluent modifier surface.

use kurbo::{BezPath, Rect, Size};
use peniko::Color;
use understory_rounded_corners::{CornerMask, Corners};

use crate::modifier::{ClipShape, Modifiers};
use crate::preset::StylePreset;

/// Content wrapped in one styling step.
///
/// Applying another modifier wraps again, so a chain reads inside out:
/// `content.square_style().corner_radius(..)` is a `Styled<Styled<C>>` whose
/// outer clip applies on top of the square preset.
#[derive(Clone, Debug, PartialEq)]
pub struct Styled<C> {
    content: C,
    modifiers: Modifiers,
}

impl<C> Styled<C> {
    /// Wrap `content` with `modifiers`.
    #[inline]
    pub const fn new(content: C, modifiers: Modifiers) -> Self {
        Self { content, modifiers }
    }

    /// The wrapped content.
    #[inline]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// The modifiers applied by this step.
    #[inline]
    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// Unwrap the content, discarding this step's modifiers.
    #[inline]
    pub fn into_content(self) -> C {
        self.content
    }

    /// Size of this step's frame given the container's offer and the content's ideal size.
    #[inline]
    pub fn layout_size(&self, available: Size, ideal: Size) -> Size {
        self.modifiers.frame.resolve(available, ideal)
    }

    /// The clip region of this step for content laid out in `bounds`, if it clips.
    pub fn clip_path(&self, bounds: Rect, tolerance: f64) -> Option<BezPath> {
        self.modifiers
            .clip
            .map(|clip| clip.to_path(bounds, tolerance))
    }
}

/// Fluent styling for any content value.
///
/// Sizes default to [`DEFAULT_CONTROL_SIZE`](crate::DEFAULT_CONTROL_SIZE) in
/// the catalog; pass it explicitly here, or build the preset with one of the
/// `*_default` constructors on [`StylePreset`] and call [`ModifierExt::styled`].
pub trait ModifierExt: Sized {
    /// Apply `preset`.
    #[inline]
    fn styled(self, preset: StylePreset) -> Styled<Self> {
        preset.apply(self)
    }

    /// Apply [`StylePreset::CircleWithoutBackground`].
    #[inline]
    fn circle_material_style_without_background(
        self,
        size: f64,
        is_selected: bool,
    ) -> Styled<Self> {
        self.styled(StylePreset::CircleWithoutBackground { size, is_selected })
    }

    /// Apply [`StylePreset::Circle`].
    #[inline]
    fn circle_material_style(self, size: f64) -> Styled<Self> {
        self.styled(StylePreset::Circle { size })
    }

    /// Apply [`StylePreset::CircleColor`].
    #[inline]
    fn circle_color_style(self, size: f64, background: Color) -> Styled<Self> {
        self.styled(StylePreset::CircleColor { size, background })
    }

    /// Apply [`StylePreset::Square`].
    #[inline]
    fn square_style(self) -> Styled<Self> {
        self.styled(StylePreset::Square)
    }

    /// Apply [`StylePreset::SquareHorizontalStretch`].
    #[inline]
    fn square_horizontal_stretch_style(self) -> Styled<Self> {
        self.styled(StylePreset::SquareHorizontalStretch)
    }

    /// Apply [`StylePreset::SquareVerticalStretch`].
    #[inline]
    fn square_vertical_stretch_style(self) -> Styled<Self> {
        self.styled(StylePreset::SquareVerticalStretch)
    }

    /// Apply [`StylePreset::Capsule`].
    #[inline]
    fn capsule_style(self) -> Styled<Self> {
        self.styled(StylePreset::Capsule)
    }

    /// Apply [`StylePreset::BackgroundCapsule`].
    #[inline]
    fn background_capsule(self, background: Color) -> Styled<Self> {
        self.styled(StylePreset::BackgroundCapsule { background })
    }

    /// Clip to the bounds with only `corners` rounded by `radius`.
    #[inline]
    fn corner_radius(self, radius: f64, corners: Corners) -> Styled<Self> {
        Styled::new(
            self,
            Modifiers::clip(ClipShape::Corners(CornerMask::new(corners, radius))),
        )
    }
}

impl<T> ModifierExt for T {}
