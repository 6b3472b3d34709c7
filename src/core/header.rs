//! Sticky header state.

/// Vertical offset above which the header switches to its scrolled style
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Class applied to the header while scrolled
pub const SCROLLED_CLASS: &str = "scrolled";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Resting,
    Scrolled,
}

impl HeaderState {
    pub fn from_offset(offset: f64) -> Self {
        Self::from_offset_with_threshold(offset, SCROLL_THRESHOLD)
    }

    pub fn from_offset_with_threshold(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderState::Scrolled
        } else {
            HeaderState::Resting
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, HeaderState::Scrolled)
    }
}

/// Tracks the last observed offset and the derived header state
#[derive(Clone, Copy, Debug)]
pub struct StickyHeader {
    threshold: f64,
    last_offset: f64,
    state: HeaderState,
}

impl StickyHeader {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_offset: 0.0,
            state: HeaderState::Resting,
        }
    }

    /// Record a scroll event and return the new state.
    pub fn observe(&mut self, offset: f64) -> HeaderState {
        self.state = HeaderState::from_offset_with_threshold(offset, self.threshold);
        // Overscroll bounce can report negative offsets
        self.last_offset = offset.max(0.0);
        self.state
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

impl Default for StickyHeader {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(HeaderState::from_offset(0.0), HeaderState::Resting);
        assert_eq!(HeaderState::from_offset(50.0), HeaderState::Resting);
        assert_eq!(HeaderState::from_offset(50.5), HeaderState::Scrolled);
        assert_eq!(HeaderState::from_offset(2000.0), HeaderState::Scrolled);
    }

    #[test]
    fn test_marker_follows_last_offset() {
        let mut header = StickyHeader::default();
        for (offset, scrolled) in [(10.0, false), (120.0, true), (51.0, true), (49.0, false)] {
            assert_eq!(header.observe(offset).is_scrolled(), scrolled);
        }
        assert!(!header.state().is_scrolled());
    }

    #[test]
    fn test_negative_offset_clamps() {
        let mut header = StickyHeader::default();
        header.observe(-30.0);
        assert_eq!(header.last_offset(), 0.0);
        assert_eq!(header.state(), HeaderState::Resting);
    }
}
