mod card;
pub mod state;

use self::card::ProductCard;
use self::state::{
    apply_listing_result, reduce, FilterDraft, FilterDraftField, PageInfo, QueryAction, SortDraft,
};
use crate::domain::a001_product::api;
use crate::shared::components::form_panel::{DraftSelectField, DraftTextField, FormPanel};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::request_sequence::RequestSequence;
use contracts::domain::a001_product::{ProductListRequest, ProductSummary};
use leptos::prelude::*;
use thaw::*;

/// Catalog browser: filter and sort panels, product cards, pagination.
#[component]
pub fn ProductList() -> impl IntoView {
    // Применённый запрос: единственный источник загрузки списка
    let request = RwSignal::new(ProductListRequest::default());

    // Черновики форм, не влияют на загрузку до нажатия Apply
    let filter_draft = RwSignal::new(FilterDraft::default());
    let sort_draft = RwSignal::new(SortDraft::default());

    let products = RwSignal::new(Vec::<ProductSummary>::new());
    let loading = RwSignal::new(false);
    let page_info = RwSignal::new(PageInfo::default());
    let sequence = StoredValue::new(RequestSequence::default());

    Effect::new(move |_| {
        let current = request.get();
        let Some(ticket) = sequence.try_update_value(|seq| seq.next()) else {
            return;
        };
        log::debug!("Fetching products #{}: {:?}", ticket, current);
        loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_products(&current).await;

            let is_latest = sequence
                .try_with_value(|seq| seq.is_latest(ticket))
                .unwrap_or(false);
            if !is_latest {
                log::debug!("Dropping stale products response #{}", ticket);
                return;
            }

            let Some(previous) = page_info.try_get_untracked() else {
                return;
            };
            let (data, info) = apply_listing_result(result, previous);
            products.try_set(data);
            page_info.try_set(info);
            loading.try_set(false);
        });
    });

    let dispatch = move |action: QueryAction| {
        let total_pages = page_info.get_untracked().total_pages;
        let next = request.with_untracked(|current| reduce(current, action, total_pages));
        if let Some(next) = next {
            request.set(next);
        }
    };

    let apply_filters = Callback::new(move |_: ()| {
        dispatch(QueryAction::ApplyFilter(filter_draft.get_untracked()))
    });
    let apply_sort = Callback::new(move |_: ()| {
        dispatch(QueryAction::ApplySort(sort_draft.get_untracked()))
    });
    let change_page = Callback::new(move |page: u32| dispatch(QueryAction::ChangePage(page)));

    let filter_text_field = move |field: FilterDraftField| {
        view! {
            <DraftTextField
                label=field.label()
                placeholder=field.placeholder()
                value=Signal::derive(move || filter_draft.with(|d| d.get(field).to_string()))
                on_input=Callback::new(move |value: String| filter_draft.update(|d| d.set(field, value)))
            />
        }
    };
    let filter_select_field = move |field: FilterDraftField| {
        view! {
            <DraftSelectField
                label=field.label()
                options=field.options()
                value=Signal::derive(move || filter_draft.with(|d| d.get(field).to_string()))
                on_change=Callback::new(move |value: String| filter_draft.update(|d| d.set(field, value)))
            />
        }
    };

    view! {
        <div class="content product-list">
            <PageHeader title="Product List" />

            <div class="form-panels">
                <FormPanel
                    title="Filter Products"
                    icon_name="filter"
                    apply_label="Apply Filters"
                    on_apply=apply_filters
                >
                    <div class="form-row">
                        {filter_text_field(FilterDraftField::ProductId)}
                        {filter_text_field(FilterDraftField::ProductName)}
                    </div>
                    <div class="form-row">
                        {filter_text_field(FilterDraftField::BrandName)}
                        {filter_text_field(FilterDraftField::CategoryName)}
                        {filter_text_field(FilterDraftField::SubcategoryName)}
                    </div>
                    <div class="form-row">
                        {filter_select_field(FilterDraftField::Active)}
                        {filter_select_field(FilterDraftField::Selected)}
                    </div>
                </FormPanel>

                <FormPanel
                    title="Sort Products"
                    icon_name="sort"
                    apply_label="Apply Sort"
                    on_apply=apply_sort
                >
                    <div class="form-row">
                        <DraftSelectField
                            label="Sort By"
                            options=SortDraft::field_options()
                            value=Signal::derive(move || sort_draft.with(|d| d.field.clone()))
                            on_change=Callback::new(move |value: String| sort_draft.update(|d| d.field = value))
                        />
                        <DraftSelectField
                            label="Order"
                            options=SortDraft::direction_options()
                            value=Signal::derive(move || sort_draft.with(|d| d.direction.clone()))
                            on_change=Callback::new(move |value: String| sort_draft.update(|d| d.direction = value))
                        />
                    </div>
                </FormPanel>
            </div>

            <Show when=move || loading.get()>
                <div class="list-status">
                    <Spinner />
                    <p>"Loading products..."</p>
                </div>
            </Show>

            <Show when=move || !loading.get() && products.with(|p| p.is_empty())>
                <p class="list-status list-status--empty">"No products found"</p>
            </Show>

            <Show when=move || !loading.get() && products.with(|p| !p.is_empty())>
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|product: &ProductSummary| product.product_id
                        children=move |product: ProductSummary| view! { <ProductCard product=product /> }
                    />
                </div>
            </Show>

            <Show when=move || { page_info.get().total_pages > 1 }>
                <PaginationControls
                    current_page=Signal::derive(move || page_info.get().current_page)
                    total_pages=Signal::derive(move || page_info.get().total_pages)
                    on_page_change=change_page
                />
            </Show>
        </div>
    }
}
