// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The preset catalog.

use peniko::Color;

use crate::modifier::{
    Background, ClipShape, Font, Foreground, Frame, Length, Material, Modifiers, SymbolRendering,
    TextStyle,
};
use crate::styled::Styled;

/// Default edge length of circle and square controls, and the fixed
/// cross-axis extent of stretch and capsule controls.
pub const DEFAULT_CONTROL_SIZE: f64 = 44.0;

/// Corner radius of square presets.
pub const SQUARE_CORNER_RADIUS: f64 = 5.0;

/// A named visual preset.
///
/// Presets are leaves: each maps its parameters to a [`Modifiers`] value
/// without consulting any other preset or any ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StylePreset {
    /// Square frame and semibold title font, accent colored when selected.
    /// No background and no clip.
    CircleWithoutBackground {
        /// Edge length of the frame.
        size: f64,
        /// Selects the accent foreground over the label foreground.
        is_selected: bool,
    },
    /// White content on a thin material, clipped to a circle.
    Circle {
        /// Edge length of the frame.
        size: f64,
    },
    /// White content on a solid color, clipped to a circle.
    CircleColor {
        /// Edge length of the frame.
        size: f64,
        /// Fill behind the content.
        background: Color,
    },
    /// 44×44 thin material square with slightly rounded corners.
    Square,
    /// Like [`StylePreset::Square`], 44 tall and as wide as the container allows.
    SquareHorizontalStretch,
    /// Like [`StylePreset::Square`], 44 wide and as tall as the container allows.
    SquareVerticalStretch,
    /// 44 tall, full-width thin material capsule.
    Capsule,
    /// 44 tall, full-width solid capsule with monochrome symbols.
    BackgroundCapsule {
        /// Fill behind the content.
        background: Color,
    },
}

impl StylePreset {
    /// [`StylePreset::CircleWithoutBackground`] at the default size.
    #[inline]
    pub const fn circle_without_background_default(is_selected: bool) -> Self {
        Self::CircleWithoutBackground {
            size: DEFAULT_CONTROL_SIZE,
            is_selected,
        }
    }

    /// [`StylePreset::Circle`] at the default size.
    #[inline]
    pub const fn circle_default() -> Self {
        Self::Circle {
            size: DEFAULT_CONTROL_SIZE,
        }
    }

    /// [`StylePreset::CircleColor`] at the default size.
    #[inline]
    pub const fn circle_color_default(background: Color) -> Self {
        Self::CircleColor {
            size: DEFAULT_CONTROL_SIZE,
            background,
        }
    }

    /// The preset's catalog name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CircleWithoutBackground { .. } => "circleWithoutBackground",
            Self::Circle { .. } => "circle",
            Self::CircleColor { .. } => "circleColor",
            Self::Square => "square",
            Self::SquareHorizontalStretch => "squareHorizontalStretch",
            Self::SquareVerticalStretch => "squareVerticalStretch",
            Self::Capsule => "capsule",
            Self::BackgroundCapsule { .. } => "backgroundCapsule",
        }
    }

    /// The modifiers this preset applies.
    pub fn modifiers(&self) -> Modifiers {
        let headline = Some(Font::semibold(TextStyle::Headline));
        let white = Some(Foreground::Color(Color::WHITE));
        let thin = Some(Background::Material(Material::Thin));
        let square_clip = Some(ClipShape::RoundedRect {
            radius: SQUARE_CORNER_RADIUS,
        });

        match *self {
            Self::CircleWithoutBackground { size, is_selected } => Modifiers {
                frame: Frame::square(size),
                font: Some(Font::semibold(TextStyle::Title3)),
                foreground: Some(if is_selected {
                    Foreground::Accent
                } else {
                    Foreground::Label
                }),
                ..Modifiers::NONE
            },
            Self::Circle { size } => Modifiers {
                frame: Frame::square(size),
                font: headline,
                foreground: white,
                background: thin,
                clip: Some(ClipShape::Circle),
                ..Modifiers::NONE
            },
            Self::CircleColor { size, background } => Modifiers {
                frame: Frame::square(size),
                font: headline,
                foreground: white,
                background: Some(Background::Color(background)),
                clip: Some(ClipShape::Circle),
                ..Modifiers::NONE
            },
            Self::Square => Modifiers {
                frame: Frame::square(DEFAULT_CONTROL_SIZE),
                font: headline,
                foreground: white,
                background: thin,
                clip: square_clip,
                ..Modifiers::NONE
            },
            Self::SquareHorizontalStretch => Modifiers {
                frame: Frame::new(Length::Fill, Length::Fixed(DEFAULT_CONTROL_SIZE)),
                font: headline,
                foreground: white,
                background: thin,
                clip: square_clip,
                ..Modifiers::NONE
            },
            Self::SquareVerticalStretch => Modifiers {
                frame: Frame::new(Length::Fixed(DEFAULT_CONTROL_SIZE), Length::Fill),
                font: headline,
                foreground: white,
                background: thin,
                clip: square_clip,
                ..Modifiers::NONE
            },
            Self::Capsule => Modifiers {
                frame: Frame::new(Length::Fill, Length::Fixed(DEFAULT_CONTROL_SIZE)),
                font: headline,
                foreground: white,
                background: thin,
                clip: Some(ClipShape::Capsule),
                ..Modifiers::NONE
            },
            Self::BackgroundCapsule { background } => Modifiers {
                frame: Frame::new(Length::Fill, Length::Fixed(DEFAULT_CONTROL_SIZE)),
                font: headline,
                symbol_rendering: Some(SymbolRendering::Monochrome),
                foreground: white,
                background: Some(Background::Color(background)),
                clip: Some(ClipShape::Capsule),
            },
        }
    }

    /// Wrap `content` in this preset.
    #[inline]
    pub fn apply<C>(self, content: C) -> Styled<C> {
        Styled::new(content, self.modifiers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    const AVAILABLE: Size = Size::new(390.0, 844.0);
    const IDEAL: Size = Size::new(17.0, 21.0);

    fn red() -> Color {
        Color::from_rgb8(255, 59, 48)
    }

    #[test]
    fn fixed_frames_match_size() {
        let fixed = [
            (StylePreset::circle_without_background_default(true), 44.0),
            (StylePreset::circle_default(), 44.0),
            (StylePreset::circle_color_default(red()), 44.0),
            (
                StylePreset::CircleWithoutBackground {
                    size: 60.0,
                    is_selected: false,
                },
                60.0,
            ),
            (StylePreset::Circle { size: 32.0 }, 32.0),
            (
                StylePreset::CircleColor {
                    size: 28.0,
                    background: red(),
                },
                28.0,
            ),
            (StylePreset::Square, 44.0),
        ];
        for (preset, edge) in fixed {
            let size = preset.modifiers().frame.resolve(AVAILABLE, IDEAL);
            assert_eq!(size, Size::new(edge, edge), "{}", preset.name());
        }
    }

    #[test]
    fn selection_picks_foreground() {
        let selected = StylePreset::circle_without_background_default(true).modifiers();
        let unselected = StylePreset::circle_without_background_default(false).modifiers();

        assert_eq!(selected.foreground, Some(Foreground::Accent));
        assert_eq!(unselected.foreground, Some(Foreground::Label));
        assert_eq!(selected.background, None);
        assert_eq!(unselected.background, None);
        assert_eq!(selected.clip, None);
        assert_eq!(selected.font, Some(Font::semibold(TextStyle::Title3)));
    }

    #[test]
    fn stretch_presets_fix_one_axis() {
        let horizontal = StylePreset::SquareHorizontalStretch.modifiers().frame;
        assert_eq!(horizontal.height, Length::Fixed(44.0));
        assert_eq!(horizontal.width, Length::Fill);
        assert_eq!(horizontal.resolve(AVAILABLE, IDEAL), Size::new(390.0, 44.0));

        let vertical = StylePreset::SquareVerticalStretch.modifiers().frame;
        assert_eq!(vertical.width, Length::Fixed(44.0));
        assert_eq!(vertical.height, Length::Fill);
        assert_eq!(vertical.resolve(AVAILABLE, IDEAL), Size::new(44.0, 844.0));
    }

    #[test]
    fn square_family_shares_fill_and_clip() {
        for preset in [
            StylePreset::Square,
            StylePreset::SquareHorizontalStretch,
            StylePreset::SquareVerticalStretch,
        ] {
            let m = preset.modifiers();
            assert_eq!(m.background, Some(Background::Material(Material::Thin)));
            assert_eq!(m.clip, Some(ClipShape::RoundedRect { radius: 5.0 }));
            assert_eq!(m.foreground, Some(Foreground::Color(Color::WHITE)));
            assert_eq!(m.font, Some(Font::semibold(TextStyle::Headline)));
        }
    }

    #[test]
    fn circles_differ_only_in_fill() {
        let material = StylePreset::Circle { size: 50.0 }.modifiers();
        let color = StylePreset::CircleColor {
            size: 50.0,
            background: red(),
        }
        .modifiers();

        assert_eq!(material.background, Some(Background::Material(Material::Thin)));
        assert_eq!(color.background, Some(Background::Color(red())));
        assert_eq!(
            Modifiers {
                background: None,
                ..material
            },
            Modifiers {
                background: None,
                ..color
            }
        );
    }

    #[test]
    fn capsules() {
        let capsule = StylePreset::Capsule.modifiers();
        let solid = StylePreset::BackgroundCapsule {
            background: Color::BLACK,
        }
        .modifiers();

        for m in [capsule, solid] {
            assert_eq!(m.clip, Some(ClipShape::Capsule));
            assert_eq!(m.frame.resolve(AVAILABLE, IDEAL), Size::new(390.0, 44.0));
        }
        assert_eq!(capsule.symbol_rendering, None);
        assert_eq!(solid.symbol_rendering, Some(SymbolRendering::Monochrome));
        assert_eq!(solid.background, Some(Background::Color(Color::BLACK)));
        assert!(capsule.background.is_some_and(|b| b.is_material()));
    }

    #[test]
    fn negative_size_is_not_clamped() {
        let m = StylePreset::Circle { size: -4.0 }.modifiers();
        assert_eq!(m.frame, Frame::square(-4.0));
    }

    #[test]
    fn names_are_unique() {
        let presets = [
            StylePreset::circle_without_background_default(false),
            StylePreset::circle_default(),
            StylePreset::circle_color_default(red()),
            StylePreset::Square,
            StylePreset::SquareHorizontalStretch,
            StylePreset::SquareVerticalStretch,
            StylePreset::Capsule,
            StylePreset::BackgroundCapsule {
                background: red(),
            },
        ];
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
