//! Offset/limit paging for the cafe listing.

/// Largest value SQLite accepts for LIMIT/OFFSET bindings.
const MAX_BOUND: u64 = i64::MAX as u64;

/// Offset/limit parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// rows to skip, in id order
    pub skip: u64,
    /// maximum rows returned; zero yields an empty page
    pub limit: u64,
}

impl Page {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

    /// Clamp into the range the store can bind, returning `(offset, limit)`.
    /// Out-of-range requests just produce empty pages.
    pub fn normalize(self) -> (u64, u64) {
        (self.skip.min(MAX_BOUND), self.limit.min(MAX_BOUND))
    }
}

impl Default for Page {
    fn default() -> Self { Self { skip: 0, limit: 10 } }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn default_values_match_listing_defaults() {
        let d = Page::default();
        assert_eq!(d.skip, 0);
        assert_eq!(d.limit, 10);
    }

    #[test]
    fn normalize_keeps_ordinary_values() {
        assert_eq!(Page::new(5, 0).normalize(), (5, 0));
        assert_eq!(Page::new(0, 25).normalize(), (0, 25));
    }

    #[test]
    fn normalize_clamps_to_signed_range() {
        let (skip, limit) = Page::new(u64::MAX, u64::MAX).normalize();
        assert_eq!(skip, i64::MAX as u64);
        assert_eq!(limit, i64::MAX as u64);
    }
}
