use super::view_model::{ProductFormData, ProductFormVm};
use crate::domain::products::api::{HttpProductsApi, ProductsApi};
use crate::shared::api_utils::ApiConfig;
use contracts::domain::products::{Product, UpdateProductDto};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Create form (no `product`) or edit form (with `product`).
#[component]
pub fn ProductForm(
    #[prop(optional)] product: Option<Product>,
    on_saved: Callback<Product>,
    on_failed: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_env);
    let vm = ProductFormVm::new();
    let editing_id = product.as_ref().map(|p| p.id);
    if let Some(p) = &product {
        vm.load(ProductFormData::from_product(p));
    }

    let handle_save = move |_| {
        if vm.saving.get_untracked() {
            return;
        }
        let dto = match vm.snapshot().validate() {
            Ok(dto) => dto,
            Err(message) => {
                vm.error.set(Some(message));
                return;
            }
        };
        vm.error.set(None);
        vm.saving.set(true);

        let api = HttpProductsApi::new(config.clone());
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api.update(id, &UpdateProductDto::from(dto)).await,
                None => api.create(&dto).await,
            };
            vm.saving.try_set(false);
            match result {
                Ok(saved) => {
                    if editing_id.is_none() {
                        vm.reset();
                    }
                    on_saved.run(saved);
                }
                Err(e) => {
                    log::error!("failed to save product: {}", e);
                    let message = format!("There was an error saving the product: {}", e);
                    vm.error.try_set(Some(message.clone()));
                    on_failed.run(message);
                }
            }
        });
    };

    view! {
        <div class="product-form">
            {move || vm.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="details-grid--3col">
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Title *"</label>
                    <Input value=vm.title placeholder="Product title" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Price *"</label>
                    <Input value=vm.price input_type=InputType::Number placeholder="0.00" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Category id *"</label>
                    <Input value=vm.category_id input_type=InputType::Number placeholder="1" />
                </div>

                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Image URL *"</label>
                    <Input value=vm.image placeholder="https://" />
                </div>

                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Description"</label>
                    <Textarea value=vm.description placeholder="Optional" attr:rows=3 />
                </div>
            </div>

            <div class="product-form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=vm.saving
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
