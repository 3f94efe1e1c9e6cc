use crate::shared::icons::icon;
use crate::shared::pagination::{has_next, has_previous, page_tokens, PageToken};
use leptos::prelude::*;

/// PaginationControls component - Previous / numbered pages / Next
///
/// Pages are 1-indexed. Disabled buttons never call `on_page_change`.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if has_previous(page) {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || !has_previous(current_page.get())
                title="Previous page"
            >
                {icon("chevron-left")}
                "Previous"
            </button>
            <div class="pagination-pages">
                {move || {
                    let current = current_page.get();
                    page_tokens(current, total_pages.get())
                        .into_iter()
                        .map(|token| match token {
                            PageToken::Page(page) => {
                                let class = if page == current {
                                    "pagination-btn pagination-btn--active"
                                } else {
                                    "pagination-btn"
                                };
                                view! {
                                    <button class=class on:click=move |_| on_page_change.run(page)>
                                        {page}
                                    </button>
                                }
                                .into_any()
                            }
                            PageToken::Ellipsis => {
                                view! { <span class="pagination-ellipsis">"..."</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if has_next(page, total_pages.get()) {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || !has_next(current_page.get(), total_pages.get())
                title="Next page"
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
