use leptos::prelude::*;
use leptos_router::components::A;

/// PageHeader component - title row shared by the catalog pages
///
/// When `back_href` is set a "← Back" link is rendered before the title.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional target of the back link
    #[prop(optional, into)]
    back_href: Option<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {back_href.map(|href| view! {
                    <A href=href attr:class="button button--ghost page-header__back">
                        "← Back"
                    </A>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
        </div>
    }
}
