use super::selection::{save_outcome_message, SelectionEditor};
use crate::domain::a001_product::api;
use crate::shared::dialogs::alert;
use crate::shared::request_sequence::RequestSequence;
use contracts::domain::a001_product::{ProductId, ProductSummary};
use contracts::domain::a002_related_item::RelatedItemId;
use leptos::prelude::*;

/// ViewModel страницы товара
///
/// Every async continuation checks the load ticket it was started with and
/// writes through `try_*`, so a reload or leaving the page drops late results.
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub product_id: RwSignal<Option<ProductId>>,
    pub product: RwSignal<Option<ProductSummary>>,
    pub editor: RwSignal<SelectionEditor>,
    pub error: RwSignal<Option<String>>,
    pub loading_product: RwSignal<bool>,
    pub loading_items: RwSignal<bool>,
    sequence: StoredValue<RequestSequence>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            product_id: RwSignal::new(None),
            product: RwSignal::new(None),
            editor: RwSignal::new(SelectionEditor::default()),
            error: RwSignal::new(None),
            loading_product: RwSignal::new(false),
            loading_items: RwSignal::new(false),
            sequence: StoredValue::new(RequestSequence::default()),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.editor.with(|e| e.is_saving())
    }

    pub fn all_selected(&self) -> bool {
        self.editor.with(|e| e.all_selected())
    }

    pub fn selected_count(&self) -> usize {
        self.editor.with(|e| e.selected_count())
    }

    /// Reset the page and fetch the product and its related items in parallel
    pub fn load(&self, id: ProductId) {
        let Some(ticket) = self.reset(Some(id)) else {
            return;
        };
        log::debug!("Loading product {} (#{})", id, ticket);
        self.loading_product.set(true);
        self.loading_items.set(true);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_product(id).await;
            if !this.is_current(ticket) {
                return;
            }
            match result {
                Ok(Some(product)) => {
                    this.product.try_set(Some(product));
                }
                Ok(None) => {
                    log::warn!("Product {} not found", id);
                    this.push_error("Product not found".to_string());
                }
                Err(e) => {
                    log::error!("Error fetching product {}: {}", id, e);
                    this.push_error(format!("Failed to load product: {}", e));
                }
            }
            this.loading_product.try_set(false);
        });

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_related_items(id).await;
            if !this.is_current(ticket) {
                return;
            }
            match result {
                Ok(items) => {
                    log::debug!("Loaded {} related items for product {}", items.len(), id);
                    this.editor.try_update(|editor| editor.initialize(items));
                }
                Err(e) => {
                    log::error!("Error fetching related items of {}: {}", id, e);
                    this.push_error(format!("Failed to load related items: {}", e));
                }
            }
            this.loading_items.try_set(false);
        });
    }

    /// Show an error without issuing any request (e.g. unparsable route id)
    pub fn fail(&self, message: String) {
        if self.reset(None).is_some() {
            self.error.set(Some(message));
        }
    }

    pub fn toggle(&self, id: RelatedItemId) {
        self.editor.update(|editor| {
            if let Err(e) = editor.toggle(id) {
                log::debug!("Toggle of {} ignored: {}", id, e);
            }
        });
    }

    pub fn toggle_all(&self) {
        self.editor.update(|editor| {
            if let Err(e) = editor.toggle_all() {
                log::debug!("Select all ignored: {}", e);
            }
        });
    }

    /// Persist the whole selection; result is reported with a blocking alert
    pub fn save_command(&self) {
        let body = match self.editor.try_update(|editor| editor.begin_save()) {
            Some(Ok(body)) => body,
            Some(Err(e)) => {
                log::debug!("Save ignored: {}", e);
                return;
            }
            None => return,
        };
        let Some(ticket) = self.sequence.try_with_value(|seq| seq.latest()) else {
            return;
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::update_selected(&body).await;
            match &result {
                Ok(()) => log::info!(
                    "Saved selection: {} of {} items selected",
                    body.selected_count(),
                    body.ids.len()
                ),
                Err(e) => log::error!("Error saving selections: {}", e),
            }
            alert(&save_outcome_message(&result));

            // После перезагрузки страницы редактор уже новый и находится в Idle
            if this.is_current(ticket) {
                this.editor.try_update(|editor| editor.finish_save());
            }
        });
    }

    /// Invalidate in-flight loads and clear the page; returns the new ticket
    fn reset(&self, id: Option<ProductId>) -> Option<u64> {
        let ticket = self.sequence.try_update_value(|seq| seq.next())?;
        self.product_id.set(id);
        self.product.set(None);
        self.editor.set(SelectionEditor::default());
        self.error.set(None);
        self.loading_product.set(false);
        self.loading_items.set(false);
        Some(ticket)
    }

    /// Add a message to the error banner without hiding earlier ones
    fn push_error(&self, message: String) {
        self.error
            .try_update(|error| *error = Some(append_error(error.take(), message)));
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.sequence
            .try_with_value(|seq| seq.is_latest(ticket))
            .unwrap_or(false)
    }
}

fn append_error(existing: Option<String>, message: String) -> String {
    match existing {
        Some(existing) if !existing.is_empty() => format!("{}; {}", existing, message),
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_load_errors_are_kept() {
        let first = append_error(None, "Failed to load product: HTTP 500".to_string());
        assert_eq!(first, "Failed to load product: HTTP 500");

        let both = append_error(Some(first), "Failed to load related items: HTTP 502".to_string());
        assert_eq!(
            both,
            "Failed to load product: HTTP 500; Failed to load related items: HTTP 502"
        );
    }
}
