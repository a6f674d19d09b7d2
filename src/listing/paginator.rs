/// Fixed-size pages over the filtered collection
///
/// Navigation is synchronous and clamped: asking for page 0 lands on the
/// first page, asking past the end lands on the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    len: usize,
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// `ceil(len / page_size)`; zero for an empty collection
    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Go to page `page` (1-based), clamped into range
    ///
    /// Returns true when the visible page actually changed, which is when the
    /// view scrolls back to the top.
    pub fn set_page(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.last_page());
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.set_page(self.current_page.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// A new filtered collection: back to page 1
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current_page = 1;
    }

    /// Collection length changed without a new filter; keep the page if it
    /// still exists
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current_page = self.current_page.clamp(1, self.last_page());
    }

    /// Follow a change of the filtered collection
    ///
    /// A new filter revision starts over on page 1 even when the result is
    /// unchanged; a catalog edit under the same filter only re-clamps.
    pub fn refresh(&mut self, len: usize, new_filter: bool) {
        if new_filter {
            self.reset(len);
        } else {
            self.set_len(len);
        }
    }

    /// Index range of the current page
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.page_size).min(self.len);
        let end = start.saturating_add(self.page_size).min(self.len);
        start..end
    }

    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// Page numbers for the pager buttons: up to `max_buttons` pages
    /// starting two before the current one
    pub fn page_numbers(&self, max_buttons: usize) -> Vec<usize> {
        let total = self.total_pages();
        let first = self.current_page.saturating_sub(2).max(1);
        (first..first + max_buttons.min(total))
            .take_while(|page| *page <= total)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Paginator::new(0, 20).total_pages(), 0);
        assert_eq!(Paginator::new(1, 20).total_pages(), 1);
        assert_eq!(Paginator::new(40, 20).total_pages(), 2);
        assert_eq!(Paginator::new(41, 20).total_pages(), 3);
    }

    #[test]
    fn test_set_page_clamps_at_boundaries() {
        let mut pager = Paginator::new(50, 20);

        pager.set_page(0);
        assert_eq!(pager.current_page(), 1);

        pager.set_page(3 + 5);
        assert_eq!(pager.current_page(), 3);

        let mut reference = Paginator::new(50, 20);
        reference.set_page(3);
        assert_eq!(pager, reference);
    }

    #[test]
    fn test_set_page_reports_change() {
        let mut pager = Paginator::new(50, 20);
        assert!(!pager.set_page(1));
        assert!(pager.set_page(2));
        assert!(!pager.set_page(2));
        assert!(pager.next());
        assert!(!pager.next());
        assert!(pager.previous());
    }

    #[test]
    fn test_page_items() {
        let items: Vec<u32> = (0..50).collect();
        let mut pager = Paginator::new(items.len(), 20);

        assert_eq!(pager.page_items(&items), &items[0..20]);
        pager.set_page(3);
        assert_eq!(pager.page_items(&items), &items[40..50]);
    }

    #[test]
    fn test_reset_and_shrink() {
        let mut pager = Paginator::new(100, 20);
        pager.set_page(5);

        pager.set_len(45);
        assert_eq!(pager.current_page(), 3);

        pager.set_len(200);
        assert_eq!(pager.current_page(), 3);

        pager.reset(200);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_refresh_restarts_only_on_new_filter() {
        let mut pager = Paginator::new(200, 20);
        pager.set_page(3);

        // Same 200 items under a new filter revision
        pager.refresh(200, true);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_range(), 0..20);

        // A product removed from the catalog while paged
        pager.set_page(10);
        pager.refresh(199, false);
        assert_eq!(pager.current_page(), 10);
        pager.refresh(150, false);
        assert_eq!(pager.current_page(), 8);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let mut pager = Paginator::new(0, 20);
        pager.set_page(4);
        assert_eq!(pager.current_page(), 1);
        assert!(pager.page_items(&items).is_empty());
        assert!(!pager.has_next());
        assert!(!pager.has_previous());
        assert!(pager.page_numbers(5).is_empty());
    }

    #[test]
    fn test_page_numbers_window() {
        let mut pager = Paginator::new(200, 20);
        assert_eq!(pager.page_numbers(5), vec![1, 2, 3, 4, 5]);

        pager.set_page(6);
        assert_eq!(pager.page_numbers(5), vec![4, 5, 6, 7, 8]);

        pager.set_page(10);
        assert_eq!(pager.page_numbers(5), vec![8, 9, 10]);

        let small = Paginator::new(30, 20);
        assert_eq!(small.page_numbers(5), vec![1, 2]);
    }
}
