pub const ITEMS_PER_PAGE: u64 = 20;

/// Page position over a server-side list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u64,
    pub per_page: u64,
    pub total_count: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(per_page: u64) -> Self {
        Self {
            current_page: 1,
            per_page: per_page.max(1),
            total_count: 0,
        }
    }

    pub fn with_total(self, total_count: u64) -> Self {
        Self {
            total_count,
            ..self
        }
    }

    pub fn at_page(self, page: u64) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    pub fn offset(&self) -> u64 {
        (self.current_page.max(1) - 1).saturating_mul(self.per_page)
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(self.per_page)
    }

    /// Controls are only worth showing with more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn previous(self) -> Self {
        self.at_page(self.current_page.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        let last = self.total_pages().max(1);
        self.at_page(self.current_page.saturating_add(1).min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let pagination = Pagination::default();
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.at_page(3).offset(), 40);
        assert_eq!(pagination.at_page(0).current_page, 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pagination = Pagination::default();
        assert_eq!(pagination.with_total(0).total_pages(), 0);
        assert_eq!(pagination.with_total(20).total_pages(), 1);
        assert_eq!(pagination.with_total(21).total_pages(), 2);
        assert!(!pagination.with_total(20).is_visible());
        assert!(pagination.with_total(21).is_visible());
    }

    #[test]
    fn test_previous_and_next_clamp() {
        let first = Pagination::default().with_total(45);
        assert!(!first.has_previous());
        assert_eq!(first.previous().current_page, 1);

        let last = first.next().next();
        assert_eq!(last.current_page, 3);
        assert!(!last.has_next());
        assert_eq!(last.next().current_page, 3);
        assert_eq!(last.previous().current_page, 2);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let pagination = Pagination::default().at_page(u64::MAX);
        assert_eq!(pagination.offset(), u64::MAX);
        assert_eq!(pagination.with_total(45).next().current_page, 3);
        assert!(!pagination.with_total(45).has_next());
    }

    #[test]
    fn test_zero_per_page_is_coerced() {
        assert_eq!(Pagination::new(0).per_page, 1);
    }
}
