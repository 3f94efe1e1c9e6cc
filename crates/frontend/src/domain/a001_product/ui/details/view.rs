use super::view_model::ProductDetailsViewModel;
use crate::shared::components::image_fallback::ImageWithFallback;
use crate::shared::components::status_badge::ActiveBadge;
use contracts::domain::a001_product::ProductSummary;
use contracts::domain::a002_related_item::RelatedItem;
use leptos::prelude::*;
use thaw::*;

fn or_not_specified(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("Not specified")
        .to_string()
}

#[component]
fn DetailRow(label: &'static str, value: Option<String>) -> impl IntoView {
    let class = if value.as_deref().is_some_and(|v| !v.trim().is_empty()) {
        "product-info__value"
    } else {
        "product-info__value product-info__value--missing"
    };

    view! {
        <div class="product-info__row">
            <span class="product-info__label">{label}</span>
            <span class=class>{or_not_specified(&value)}</span>
        </div>
    }
}

/// Основная карточка товара
#[component]
pub fn ProductInfoCard(product: ProductSummary) -> impl IntoView {
    let name = product.display_name().map(str::to_string);

    view! {
        <Card class="product-info">
            <div class="product-info__layout">
                <ImageWithFallback
                    src=product.url_preview_image.clone()
                    alt=name.clone().unwrap_or_default()
                    fallback=name.clone().unwrap_or_else(|| "No Image".to_string())
                    class="product-info__image"
                />
                <div class="product-info__body">
                    <div class="product-info__top">
                        <div class="product-info__meta">
                            <span class="product-info__id">{format!("ID: {}", product.product_id)}</span>
                            {product.active.map(|active| view! { <ActiveBadge active=active mark_first=true /> })}
                        </div>
                        {product.url.clone().filter(|u| !u.trim().is_empty()).map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="product-info__link">
                                "View on Website ↗"
                            </a>
                        })}
                    </div>
                    <h2 class="product-info__name">{name.unwrap_or_default()}</h2>
                    <div class="product-info__grid">
                        <DetailRow label="Brand:" value=product.brand_name.clone() />
                        <DetailRow label="Category:" value=product.category_name.clone() />
                        <DetailRow label="Subcategory:" value=product.subcategory_name.clone() />
                    </div>
                </div>
            </div>
        </Card>
    }
}

/// Select All / Save bar, sticky above the item grid
#[component]
pub fn SelectionActionBar(vm: ProductDetailsViewModel) -> impl IntoView {
    let is_saving = move || vm.is_saving();

    view! {
        <div class="action-bar">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(is_saving)
                on_click=move |_| vm.toggle_all()
            >
                {move || if vm.all_selected() { "Unselect All" } else { "Select All" }}
            </Button>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(is_saving)
                on_click=move |_| vm.save_command()
                attr:class="action-bar__save"
            >
                {move || {
                    if is_saving() {
                        view! {
                            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                                <Spinner size=SpinnerSize::Tiny />
                                "Saving..."
                            </Flex>
                        }
                        .into_any()
                    } else {
                        format!("Save Selections ({} selected)", vm.selected_count()).into_any()
                    }
                }}
            </Button>
        </div>
    }
}

#[component]
fn RelatedItemCard(item: RelatedItem, vm: ProductDetailsViewModel) -> impl IntoView {
    let id = item.id;
    let is_selected = move || vm.editor.with(|e| e.is_selected(id));
    let title = item.title.clone().filter(|t| !t.trim().is_empty());

    view! {
        <div
            class=move || {
                if is_selected() { "related-item related-item--selected" } else { "related-item" }
            }
            on:click=move |_| vm.toggle(id)
        >
            <div class=move || {
                if is_selected() { "related-item__mark related-item__mark--on" } else { "related-item__mark" }
            }>
                {move || if is_selected() { "✓" } else { "○" }}
            </div>
            <ImageWithFallback
                src=item.link.clone()
                alt=title.clone().unwrap_or_default()
                fallback=title.clone().unwrap_or_else(|| "No Image".to_string())
                class="related-item__image"
            />
            <div class="related-item__body">
                <h3 class="related-item__title">
                    {title.unwrap_or_else(|| "Untitled Item".to_string())}
                </h3>
                {item.context.clone().filter(|c| !c.trim().is_empty()).map(|context| view! {
                    <a
                        href=context
                        target="_blank"
                        rel="noopener noreferrer"
                        class="related-item__source"
                        on:click=|ev| ev.stop_propagation()
                    >
                        "View Source ↗"
                    </a>
                })}
            </div>
        </div>
    }
}

/// Сетка связанных элементов; while saving it ignores clicks
#[component]
pub fn RelatedItemsGrid(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <h2 class="section-title">"Related Items"</h2>

        <Show when=move || vm.loading_items.get()>
            <div class="list-status">
                <Spinner />
            </div>
        </Show>

        <div class=move || {
            if vm.is_saving() { "related-grid related-grid--saving" } else { "related-grid" }
        }>
            <For
                each=move || vm.editor.with(|e| e.items().to_vec())
                key=|item: &RelatedItem| item.id
                children=move |item: RelatedItem| view! { <RelatedItemCard item=item vm=vm /> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_not_specified() {
        assert_eq!(or_not_specified(&Some("Lumo".to_string())), "Lumo");
        assert_eq!(or_not_specified(&Some(String::new())), "Not specified");
        assert_eq!(or_not_specified(&None), "Not specified");
    }
}
