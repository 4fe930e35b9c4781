use crate::domain::catalog::Catalog;

/// The site index drawn behind the search modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub scroll: u16,
    /// Set while the search modal is open.
    pub scroll_locked: bool,
}

impl PageState {
    pub fn scroll_by(&mut self, delta: i32, catalog: Option<&Catalog>) {
        if self.scroll_locked {
            return;
        }
        let max_scroll = catalog.map_or(0, |c| page_line_count(c).saturating_sub(1)) as i32;
        let next = (i32::from(self.scroll) + delta).clamp(0, max_scroll);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
    }
}

/// Lines in the rendered site index: per category a heading, one line per
/// entry and a blank separator.
#[must_use]
pub fn page_line_count(catalog: &Catalog) -> usize {
    catalog
        .by_category()
        .iter()
        .map(|(_, items)| items.len() + 2)
        .sum()
}
