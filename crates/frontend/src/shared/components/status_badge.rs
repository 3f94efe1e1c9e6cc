use leptos::prelude::*;

/// Active / inactive marker of a product
#[component]
pub fn ActiveBadge(
    active: bool,
    /// Put the mark before the caption ("✓ Active") instead of after it
    #[prop(optional)]
    mark_first: bool,
) -> impl IntoView {
    let (class, caption, mark) = if active {
        ("badge badge--success", "Active", "✓")
    } else {
        ("badge badge--error", "Inactive", "✗")
    };
    let text = if mark_first {
        format!("{} {}", mark, caption)
    } else {
        format!("{} {}", caption, mark)
    };

    view! { <span class=class>{text}</span> }
}
