use crate::shared::components::image_fallback::ImageWithFallback;
use crate::shared::components::status_badge::ActiveBadge;
use contracts::domain::a001_product::ProductSummary;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::components::A;

fn or_na(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("N/A")
        .to_string()
}

/// Карточка товара в сетке каталога
#[component]
pub fn ProductCard(product: ProductSummary) -> impl IntoView {
    let details_href = format!("/product/{}", product.product_id.as_string());
    let name = product.display_name().map(str::to_string);

    view! {
        <div class="product-card">
            <ImageWithFallback
                src=product.url_preview_image.clone()
                alt=name.clone().unwrap_or_default()
                fallback=name.clone().unwrap_or_else(|| "Product".to_string())
                class="product-card__image"
            />
            <div class="product-card__body">
                <div class="product-card__meta">
                    <span class="product-card__id">{format!("ID: {}", product.product_id)}</span>
                    {product.active.map(|active| view! { <ActiveBadge active=active /> })}
                </div>
                <div class="product-card__name">
                    {name.unwrap_or_else(|| "Unknown Product".to_string())}
                </div>
                <div class="product-card__row">
                    <span class="product-card__label">"Brand:"</span>
                    <span class="product-card__value">{or_na(&product.brand_name)}</span>
                </div>
                <div class="product-card__row">
                    <span class="product-card__label">"Category:"</span>
                    <span class="product-card__value">{or_na(&product.category_name)}</span>
                </div>
                <div class="product-card__row">
                    <span class="product-card__label">"Subcategory:"</span>
                    <span class="product-card__value">{or_na(&product.subcategory_name)}</span>
                </div>
                <A href=details_href attr:class="button button--primary product-card__details">
                    "View Details"
                </A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(&Some("Lumo".to_string())), "Lumo");
        assert_eq!(or_na(&Some("  ".to_string())), "N/A");
        assert_eq!(or_na(&None), "N/A");
    }
}
