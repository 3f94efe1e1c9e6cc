use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Router>
                <Shell>
                    <AppRoutes />
                </Shell>
            </Router>
        </ConfigProvider>
    }
}
