//! Расчёт кнопок пагинации.
//!
//! Page 1 and the last page are always shown, the current page is shown with
//! one sibling on each side, and gaps are collapsed into an ellipsis.

/// Pages shown on each side of the current page
pub const SIBLINGS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Tokens for the numbered part of the pagination bar (pages are 1-indexed).
pub fn page_tokens(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    let mut tokens = vec![PageToken::Page(1)];

    let left_bound = current_page.saturating_sub(SIBLINGS).max(2);
    if left_bound > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    let right_bound = current_page.saturating_add(SIBLINGS).min(total_pages.saturating_sub(1));
    for page in left_bound..=right_bound {
        tokens.push(PageToken::Page(page));
    }

    if current_page.saturating_add(SIBLINGS) < total_pages.saturating_sub(1) {
        tokens.push(PageToken::Ellipsis);
    }

    if total_pages > 1 {
        tokens.push(PageToken::Page(total_pages));
    }

    tokens
}

pub fn has_previous(current_page: u32) -> bool {
    current_page > 1
}

pub fn has_next(current_page: u32, total_pages: u32) -> bool {
    current_page < total_pages
}
