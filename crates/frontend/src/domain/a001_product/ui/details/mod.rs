//! Product Details UI Module
//!
//! - selection.rs: selection state machine of the related items
//! - view_model.rs: ViewModel with load / toggle / save commands
//! - view.rs: Leptos components (pure UI)

pub mod selection;
mod view;
mod view_model;

pub use view_model::ProductDetailsViewModel;

use self::view::{ProductInfoCard, RelatedItemsGrid, SelectionActionBar};
use crate::shared::components::page_header::PageHeader;
use contracts::domain::a001_product::ProductId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Страница `/product/:product_id`
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let vm = ProductDetailsViewModel::new();

    // Перезагрузка при смене параметра маршрута
    Effect::new(move |_| {
        let raw = params.with(|p| p.get("product_id").unwrap_or_default());
        match ProductId::from_string(&raw) {
            Ok(id) => vm.load(id),
            Err(e) => {
                log::warn!("{}", e);
                vm.fail(e);
            }
        }
    });

    view! {
        <div class="content product-details">
            <PageHeader title="Product Details" back_href="/" />

            {move || vm.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <Show when=move || vm.loading_product.get()>
                <div class="list-status">
                    <Spinner />
                    <p>"Loading product..."</p>
                </div>
            </Show>

            {move || vm.product.get().map(|product| view! { <ProductInfoCard product=product /> })}

            <Show when=move || vm.product_id.get().is_some()>
                <SelectionActionBar vm=vm />
                <RelatedItemsGrid vm=vm />
            </Show>
        </div>
    }
}
