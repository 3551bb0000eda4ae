// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Rounded Corners: rectangles with independently rounded corners.
//!
//! This crate builds clip paths for an axis-aligned rectangle where each of the
//! four corners is either rounded with a shared radius or left as a sharp 90°
//! vertex. It is the geometry behind a "round only these corners" modifier:
//! a chat bubble with a square tail corner, a sheet with rounded top edges,
//! a segmented control whose inner segments stay square.
//!
//! - [`Corners`]: a set of the four rectangle corners.
//! - [`CornerMask`]: a corner set plus a radius magnitude.
//! - [`CornerMask::to_path`] / [`rounded_corners_path`]: the clip region for a
//!   concrete rectangle, as a [`kurbo::BezPath`].
//!
//! Selected corners become quarter-circle arcs centered `radius` inward along
//! both adjacent edges; unselected corners keep the rectangle's own vertex.
//!
//! ```rust
//! use kurbo::{Rect, Shape};
//! use understory_rounded_corners::{CornerMask, Corners};
//!
//! let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
//! let mask = CornerMask::new(Corners::TOP_LEFT, 10.0);
//! let path = mask.to_path(rect, 0.1);
//!
//! // The rounded corner cuts the origin out of the clip, the others keep their vertex.
//! assert_eq!(path.winding((0.5, 0.5).into()), 0);
//! assert_ne!(path.winding((99.5, 0.5).into()), 0);
//! assert_ne!(path.winding((0.5, 59.5).into()), 0);
//! ```
//!
//! ## Degenerate input
//!
//! Masks store the radius exactly as given. Normalization happens when the
//! mask meets a rectangle, using the same rules as [`kurbo::RoundedRect`]:
//! the rectangle is normalized, the radius magnitude is used, and radii are
//! limited to half of the shorter side. A zero radius or an empty corner set
//! yields the plain rectangle, element for element.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod mask;

pub use mask::{CornerMask, rounded_corners_path, rounded_rect_path};

bitflags::bitflags! {
    /// A set of rectangle corners.
    ///
    /// Bit values match the conventional `UIRectCorner` layout so masks can be
    /// exchanged with platform code as raw bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        /// The corner at the minimum x and minimum y.
        const TOP_LEFT     = 0b0001;
        /// The corner at the maximum x and minimum y.
        const TOP_RIGHT    = 0b0010;
        /// The corner at the minimum x and maximum y.
        const BOTTOM_LEFT  = 0b0100;
        /// The corner at the maximum x and maximum y.
        const BOTTOM_RIGHT = 0b1000;

        /// Both corners along the top edge.
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        /// Both corners along the bottom edge.
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        /// Both corners along the left edge.
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        /// Both corners along the right edge.
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        /// All four corners.
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_sets_cover_all() {
        assert_eq!(Corners::TOP | Corners::BOTTOM, Corners::ALL);
        assert_eq!(Corners::LEFT | Corners::RIGHT, Corners::ALL);
        assert_eq!(Corners::ALL, Corners::all());
        assert!(Corners::default().is_empty());
    }

    #[test]
    fn bits_match_platform_layout() {
        assert_eq!(Corners::TOP_LEFT.bits(), 1);
        assert_eq!(Corners::TOP_RIGHT.bits(), 2);
        assert_eq!(Corners::BOTTOM_LEFT.bits(), 4);
        assert_eq!(Corners::BOTTOM_RIGHT.bits(), 8);
        assert_eq!(Corners::from_bits_truncate(0xff), Corners::ALL);
    }
}
