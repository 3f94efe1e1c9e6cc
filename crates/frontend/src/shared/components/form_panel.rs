use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// FormPanel component - titled panel holding a draft form and its Apply button
///
/// The panel never applies anything by itself: edits inside `children` only
/// change draft state, `on_apply` is the single commit point.
#[component]
pub fn FormPanel(
    /// Panel title
    #[prop(into)]
    title: String,

    /// Icon name from `shared::icons`
    #[prop(into)]
    icon_name: String,

    /// Caption of the apply button
    #[prop(into)]
    apply_label: String,

    /// Commit callback
    on_apply: Callback<()>,

    /// Form fields
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-panel">
            <div class="form-panel__header">
                {icon(&icon_name)}
                <h2 class="form-panel__title">{title}</h2>
            </div>
            <div class="form-panel__content">
                {children()}
            </div>
            <div class="form-panel__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| on_apply.run(())
                >
                    {apply_label}
                </Button>
            </div>
        </div>
    }
}

/// Labelled text input bound to one draft field
#[component]
pub fn DraftTextField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled `<select>` bound to one draft field; options are `(value, caption)`
#[component]
pub fn DraftSelectField(
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <select
                class="form-control form-select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, caption)| {
                        view! {
                            <option value=option_value selected=move || value.get() == option_value>
                                {caption}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
