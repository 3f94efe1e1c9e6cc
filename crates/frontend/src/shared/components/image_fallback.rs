//! Картинка с заглушкой.
//!
//! Renders the placeholder text instead of the image when the URL is missing,
//! blank, or fails to load.

use leptos::prelude::*;

#[component]
pub fn ImageWithFallback(
    /// Image URL
    #[prop(into)]
    src: Option<String>,

    /// Alt text for the image
    #[prop(into)]
    alt: String,

    /// Text shown in place of the image
    #[prop(into)]
    fallback: String,

    /// Class of the wrapping container
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let src = src.filter(|url| !url.trim().is_empty());
    let (failed, set_failed) = signal(src.is_none());

    view! {
        <div class=format!("image-frame {}", class)>
            {move || {
                match (src.clone(), failed.get()) {
                    (Some(url), false) => view! {
                        <img
                            src=url
                            alt=alt.clone()
                            class="image-frame__img"
                            on:error=move |_| set_failed.set(true)
                        />
                    }
                    .into_any(),
                    _ => view! {
                        <div class="image-frame__placeholder">{fallback.clone()}</div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
