use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a001_product::ui::list::ProductList;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="content not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to products"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=ProductList />
            <Route path=path!("/product/:product_id") view=ProductDetailsPage />
        </Routes>
    }
}
