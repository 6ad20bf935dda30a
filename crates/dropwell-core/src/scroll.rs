//! Scroll-to-bottom detection for infinitely loading lists.

/// Scroll geometry of a scrollable element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content.
    pub scroll_top: f64,
    /// Visible height of the element.
    pub offset_height: f64,
    /// Total height of the scrollable content.
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Whether the viewport has reached the end of the content.
    ///
    /// Fractional `scroll_top` values on high-DPI screens can land just
    /// past the end, so this is a `>=` comparison.
    #[must_use]
    pub fn is_at_bottom(self) -> bool {
        self.scroll_top + self.offset_height >= self.scroll_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            offset_height: 200.0,
            scroll_height: 1000.0,
        }
    }

    #[test]
    fn top_is_not_bottom() {
        assert!(!metrics(0.0).is_at_bottom());
    }

    #[test]
    fn exact_end_is_bottom() {
        assert!(metrics(800.0).is_at_bottom());
    }

    #[test]
    fn overscroll_is_bottom() {
        assert!(metrics(800.5).is_at_bottom());
    }

    #[test]
    fn one_pixel_short_is_not_bottom() {
        assert!(!metrics(799.0).is_at_bottom());
    }

    #[test]
    fn content_shorter_than_viewport_is_bottom() {
        let m = ScrollMetrics {
            scroll_top: 0.0,
            offset_height: 300.0,
            scroll_height: 120.0,
        };
        assert!(m.is_at_bottom());
    }
}
