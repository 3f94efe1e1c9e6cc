use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__brand">
                    {icon("products")}
                    <span class="header__title">"Product Catalog"</span>
                </A>
            </div>
        </header>
    }
}
