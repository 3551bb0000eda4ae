// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display size queries against an injected host.

use kurbo::Size;

/// Host capability that reports the size of the active display.
///
/// Implemented by the windowing layer and passed to the code that needs it;
/// there is no process-wide registry to consult.
pub trait DisplaySource {
    /// Size of the primary display of the first connected scene, if any.
    fn primary_display_size(&self) -> Option<Size>;
}

/// A host without any display surface (tests, headless rendering).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Headless;

impl DisplaySource for Headless {
    #[inline]
    fn primary_display_size(&self) -> Option<Size> {
        None
    }
}

/// A fixed display size.
impl DisplaySource for Size {
    #[inline]
    fn primary_display_size(&self) -> Option<Size> {
        Some(*self)
    }
}

impl<T: DisplaySource> DisplaySource for Option<T> {
    #[inline]
    fn primary_display_size(&self) -> Option<Size> {
        self.as_ref()
            .and_then(|source| source.primary_display_size())
    }
}

impl<T: DisplaySource + ?Sized> DisplaySource for &T {
    #[inline]
    fn primary_display_size(&self) -> Option<Size> {
        (**self).primary_display_size()
    }
}

/// Size of the current display, or [`Size::ZERO`] when `source` has none.
pub fn screen_size<S: DisplaySource + ?Sized>(source: &S) -> Size {
    match source.primary_display_size() {
        Some(size) => size,
        None => {
            tracing::debug!("no active display surface, reporting zero screen size");
            Size::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scene {
        windows: &'static [Size],
    }

    impl DisplaySource for Scene {
        fn primary_display_size(&self) -> Option<Size> {
            self.windows.first().copied()
        }
    }

    #[test]
    fn headless_is_zero() {
        assert_eq!(screen_size(&Headless), Size::ZERO);
        assert_eq!(screen_size(&None::<Size>), Size::ZERO);
    }

    const WINDOWS: &[Size] = &[Size::new(1179.0, 2556.0), Size::new(800.0, 600.0)];

    #[test]
    fn reports_first_window() {
        let scene = Scene { windows: WINDOWS };
        assert_eq!(screen_size(&scene), Size::new(1179.0, 2556.0));
        assert_eq!(screen_size(&Scene { windows: &[] }), Size::ZERO);
    }

    #[test]
    fn trait_objects_and_fixed_sizes() {
        let fixed = Size::new(390.0, 844.0);
        let dynamic: &dyn DisplaySource = &fixed;
        assert_eq!(screen_size(dynamic), fixed);
        assert_eq!(screen_size(&Some(fixed)), fixed);
    }
}
