//! Selection range over character offsets

/// A half-open range `[from, to)` of character offsets.
///
/// Always well-formed: `from <= to`. Construct through [`Selection::clamped`]
/// when the offsets come from a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    from: usize,
    to: usize,
}

impl Selection {
    /// Clamp both offsets into `[0, len]`, swapping them if reversed
    pub fn clamped(from: usize, to: usize, len: usize) -> Self {
        let (from, to) = (from.min(len), to.min(len));
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    /// `(from, to)` pair
    pub fn range(&self) -> (usize, usize) {
        (self.from, self.to)
    }

    /// Check if selection is empty (from == to)
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Check if an offset is within this selection (end exclusive)
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.from && offset < self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamped_in_range() {
        let sel = Selection::clamped(2, 8, 10);
        assert_eq!(sel.range(), (2, 8));
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_selection_clamped_past_end() {
        assert_eq!(Selection::clamped(100, 100, 12).range(), (12, 12));
        assert_eq!(Selection::clamped(3, 100, 12).range(), (3, 12));
    }

    #[test]
    fn test_selection_clamped_reversed() {
        assert_eq!(Selection::clamped(8, 2, 10).range(), (2, 8));
        assert_eq!(Selection::clamped(50, 4, 10).range(), (4, 10));
    }

    #[test]
    fn test_selection_clamped_empty_document() {
        assert_eq!(Selection::clamped(5, 9, 0).range(), (0, 0));
    }

    #[test]
    fn test_selection_contains() {
        let sel = Selection::clamped(2, 8, 10);
        assert!(!sel.contains(1));
        assert!(sel.contains(2));
        assert!(sel.contains(7));
        assert!(!sel.contains(8)); // End is exclusive
    }
}
