//! Products page state and the transitions driven by user actions and API
//! responses.

use contracts::domain::products::Product;
use contracts::shared::notification::Notification;
use leptos::prelude::*;

use super::api::ProductsApi;
use crate::shared::api_utils::ApiError;

pub const DELETE_CONFIRM_MESSAGE: &str =
    "¿Are you sure that you want to delete this item? Once deleted you can't recover it";
pub const DELETE_SUCCESS_MESSAGE: &str = "Item was deleted successfully";
pub const DELETE_ERROR_MESSAGE: &str = "There was an error trying to delete the item";
pub const DELETE_REJECTED_MESSAGE: &str = "The server did not confirm the deletion of the item";
pub const LOAD_ERROR_MESSAGE: &str = "There was an error trying to load the products";
pub const PRODUCT_CREATED_MESSAGE: &str = "Product added successfully";

/// Id value meaning "nothing pending".
pub const NO_PENDING_DELETE: i64 = 0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub form_open: bool,
    pub products: Vec<Product>,
    /// Dialog surface: delete prompt and its outcome.
    pub modal_info: Notification,
    /// Inline banner surface.
    pub alert: Notification,
    pub pending_delete_id: i64,
    pub is_loaded: bool,
    /// Sequence number of the latest load; older responses are dropped.
    load_seq: u64,
}

/// Result of confirming a deletion.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Server answered `rta: true`.
    Deleted,
    /// Server answered without confirming.
    Rejected,
    Failed(ApiError),
}

impl DeleteOutcome {
    pub fn from_result(result: Result<bool, ApiError>) -> Self {
        match result {
            Ok(true) => DeleteOutcome::Deleted,
            Ok(false) => DeleteOutcome::Rejected,
            Err(e) => DeleteOutcome::Failed(e),
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            DeleteOutcome::Deleted => Notification::success(DELETE_SUCCESS_MESSAGE),
            DeleteOutcome::Rejected => Notification::error(DELETE_REJECTED_MESSAGE),
            DeleteOutcome::Failed(_) => Notification::error(DELETE_ERROR_MESSAGE),
        }
    }
}

impl ProductsState {
    pub fn open_create_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    /// Remember `id` and ask the user to confirm.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete_id = id;
        self.modal_info = Notification::confirm_delete(DELETE_CONFIRM_MESSAGE);
    }

    pub fn has_pending_delete(&self) -> bool {
        self.pending_delete_id != NO_PENDING_DELETE
    }

    pub fn close_modal_info(&mut self) {
        self.modal_info = self.modal_info.closed();
    }

    pub fn close_alert(&mut self) {
        self.alert = self.alert.closed();
    }

    /// Start a load; pass the returned ticket to `apply_loaded`.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// Replace the cached list, or keep it and raise an error banner.
    ///
    /// The banner is only replaced when it differs from the current one:
    /// the page reloads whenever the banner changes, so an unchanged error
    /// must not trigger another round.
    pub fn apply_loaded(&mut self, ticket: u64, result: Result<Vec<Product>, ApiError>) {
        if ticket != self.load_seq {
            log::debug!("dropping stale product list (ticket {})", ticket);
            return;
        }
        match result {
            Ok(products) => {
                self.products = products;
                self.is_loaded = true;
            }
            Err(e) => {
                log::warn!("failed to load products: {}", e);
                let alert = Notification::error(LOAD_ERROR_MESSAGE);
                if self.alert != alert {
                    self.alert = alert;
                }
            }
        }
    }

    /// Show the outcome in the dialog. The pending id stays until the next request.
    pub fn apply_delete(&mut self, outcome: &DeleteOutcome) {
        match outcome {
            DeleteOutcome::Deleted => log::info!("product {} deleted", self.pending_delete_id),
            DeleteOutcome::Rejected => {
                log::warn!("deletion of product {} not confirmed", self.pending_delete_id)
            }
            DeleteOutcome::Failed(e) => {
                log::error!("failed to delete product {}: {}", self.pending_delete_id, e)
            }
        }
        self.modal_info = outcome.notification();
    }

    /// Close the create form and announce the new product on the banner.
    pub fn product_created(&mut self, product: &Product) {
        log::debug!("product {} created from form", product.id);
        self.form_open = false;
        self.alert = Notification::product_created(PRODUCT_CREATED_MESSAGE);
    }

    pub fn form_failed(&mut self, message: impl Into<String>) {
        self.alert = Notification::error(message);
    }
}

pub fn create_state() -> RwSignal<ProductsState> {
    RwSignal::new(ProductsState::default())
}

/// Inline banner of `state`; readers rerun only when the banner changes.
pub fn alert_memo(state: RwSignal<ProductsState>) -> Memo<Notification> {
    Memo::new(move |_| state.with(|s| s.alert.clone()))
}

/// Dialog notification of `state`; readers rerun only when it changes.
pub fn modal_info_memo(state: RwSignal<ProductsState>) -> Memo<Notification> {
    Memo::new(move |_| state.with(|s| s.modal_info.clone()))
}

/// Call the delete endpoint and classify the answer.
pub async fn delete_product<A: ProductsApi + ?Sized>(api: &A, id: i64) -> DeleteOutcome {
    DeleteOutcome::from_result(api.delete(id).await.map(|r| r.rta))
}
