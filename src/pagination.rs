//! Windowed page-range generation for pagination controls.
//!
//! Produces the familiar `1 … 4 5 6 … 10` sequence: the first and last pages
//! are always shown, plus a window of two pages on either side of the current
//! page, with a single ellipsis standing in for each elided run.

/// One slot in the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Number(u32),
    Ellipsis,
}

/// Fallback page count when the caller has no real total from the upstream.
pub const DEFAULT_TOTAL_PAGES: u32 = 10;

/// How many pages to keep visible on each side of the current page.
const WINDOW: u32 = 2;

/// Build the ordered display sequence for page controls.
///
/// Page `i` is included when it is the first page, the last page, or within
/// `WINDOW` of `current_page`. A gap opening right next to the window edge
/// (at `current_page - 3` or `current_page + 3`) collapses to one ellipsis.
pub fn compute_range(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    let mut items = Vec::new();

    for i in 1..=total_pages {
        let in_window = i + WINDOW >= current_page && i <= current_page + WINDOW;
        if i == 1 || i == total_pages || in_window {
            items.push(PageItem::Number(i));
        } else if i + WINDOW + 1 == current_page || i == current_page + WINDOW + 1 {
            items.push(PageItem::Ellipsis);
        }
    }

    items
}
