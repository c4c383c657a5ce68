/// Vertical offset in pixels past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, SCROLL_THRESHOLD));
        assert!(!is_scrolled(50.0, SCROLL_THRESHOLD));
        assert!(is_scrolled(50.5, SCROLL_THRESHOLD));
        assert!(is_scrolled(1200.0, SCROLL_THRESHOLD));
    }

    #[test]
    fn test_negative_overscroll() {
        // rubber-band scrolling on some browsers reports negative offsets
        assert!(!is_scrolled(-30.0, SCROLL_THRESHOLD));
    }
}
