// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner masks and the path construction behind them.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, BezPath, Point, Rect, RoundedRect, RoundedRectRadii, Vec2};

use crate::Corners;

/// A selection of corners to round, together with the rounding radius.
///
/// The mask is independent of any rectangle; call [`CornerMask::to_path`] once
/// the bounds of the content are known. Masks are cheap values and are meant to
/// be rebuilt on every layout pass rather than cached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerMask {
    /// Corners that receive a quarter-circle arc.
    pub corners: Corners,
    /// Radius of every selected corner.
    ///
    /// Stored as given. See the crate docs for how out-of-range values are
    /// normalized when the mask is applied.
    pub radius: f64,
}

impl CornerMask {
    /// Create a mask rounding `corners` with `radius`.
    #[inline]
    pub const fn new(corners: Corners, radius: f64) -> Self {
        Self { corners, radius }
    }

    /// Create a mask that rounds all four corners with `radius`.
    #[inline]
    pub const fn uniform(radius: f64) -> Self {
        Self::new(Corners::ALL, radius)
    }

    /// Returns true if applying this mask leaves a rectangle unchanged.
    #[inline]
    pub fn is_sharp(&self) -> bool {
        self.corners.is_empty() || self.radius == 0.0
    }

    /// Per-corner radii: `radius` on selected corners, zero elsewhere.
    pub fn radii(&self) -> RoundedRectRadii {
        let pick = |corner: Corners| {
            if self.corners.contains(corner) {
                self.radius
            } else {
                0.0
            }
        };
        RoundedRectRadii::new(
            pick(Corners::TOP_LEFT),
            pick(Corners::TOP_RIGHT),
            pick(Corners::BOTTOM_RIGHT),
            pick(Corners::BOTTOM_LEFT),
        )
    }

    /// The mask applied to `rect` as a kurbo rounded rectangle.
    ///
    /// Kurbo normalizes the rectangle and limits each radius to half of the
    /// shorter side.
    #[inline]
    pub fn rounded_rect(&self, rect: Rect) -> RoundedRect {
        RoundedRect::from_rect(rect, self.radii())
    }

    /// The clip region of `rect` under this mask.
    ///
    /// `tolerance` bounds the error of the cubic approximation of each arc.
    pub fn to_path(&self, rect: Rect, tolerance: f64) -> BezPath {
        rounded_rect_path(&self.rounded_rect(rect), tolerance)
    }
}

/// Build the clip path of `rect` with `corners` rounded by `radius`.
///
/// Shorthand for [`CornerMask::new`] followed by [`CornerMask::to_path`].
pub fn rounded_corners_path(rect: Rect, radius: f64, corners: Corners, tolerance: f64) -> BezPath {
    CornerMask::new(corners, radius).to_path(rect, tolerance)
}

/// Build a closed path for a rounded rectangle, keeping zero-radius corners sharp.
///
/// The outline starts at the top-left and runs through the top-right,
/// bottom-right and bottom-left corners, matching the element order kurbo
/// uses for [`Rect`]. Corners with a zero radius emit a single vertex and no
/// curve, so a rounded rectangle without any radius produces exactly the
/// elements of `rect.to_path(..)`.
pub fn rounded_rect_path(rounded: &RoundedRect, tolerance: f64) -> BezPath {
    let rect = rounded.rect();
    let RoundedRectRadii {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    } = rounded.radii();

    let mut path = BezPath::new();
    path.move_to((rect.x0 + top_left, rect.y0));

    path.line_to((rect.x1 - top_right, rect.y0));
    if top_right > 0.0 {
        quarter_arc(
            &mut path,
            Point::new(rect.x1 - top_right, rect.y0 + top_right),
            top_right,
            -FRAC_PI_2,
            tolerance,
        );
    }

    path.line_to((rect.x1, rect.y1 - bottom_right));
    if bottom_right > 0.0 {
        quarter_arc(
            &mut path,
            Point::new(rect.x1 - bottom_right, rect.y1 - bottom_right),
            bottom_right,
            0.0,
            tolerance,
        );
    }

    path.line_to((rect.x0 + bottom_left, rect.y1));
    if bottom_left > 0.0 {
        quarter_arc(
            &mut path,
            Point::new(rect.x0 + bottom_left, rect.y1 - bottom_left),
            bottom_left,
            FRAC_PI_2,
            tolerance,
        );
    }

    // A sharp top-left corner is the starting vertex, so closing the path draws the left edge.
    if top_left > 0.0 {
        path.line_to((rect.x0, rect.y0 + top_left));
        quarter_arc(
            &mut path,
            Point::new(rect.x0 + top_left, rect.y0 + top_left),
            top_left,
            PI,
            tolerance,
        );
    }

    path.close_path();
    path
}

/// Append a clockwise (in y-down space) quarter circle starting at `start_angle`.
fn quarter_arc(path: &mut BezPath, center: Point, radius: f64, start_angle: f64, tolerance: f64) {
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(tolerance));
}
