use crate::domain::products::api::{HttpProductsApi, ProductsApi};
use crate::domain::products::ui::form::ProductForm;
use crate::domain::products::ui::list::PRODUCTS_PATH;
use crate::shared::alert::Alert;
use crate::shared::api_utils::ApiConfig;
use contracts::domain::products::Product;
use contracts::shared::notification::Notification;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

/// Product ids are positive integers; anything else is not a product route.
pub fn parse_product_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Page behind `edit/{id}`: loads one product and hosts the form in edit mode.
#[component]
#[allow(non_snake_case)]
pub fn EditProduct() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_env);
    let params = use_params_map();
    let navigate = use_navigate();

    let product = RwSignal::new(None::<Product>);
    let alert = RwSignal::new(Notification::default());

    let product_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|raw| parse_product_id(&raw))));

    Effect::new(move |_| {
        product.set(None);
        let Some(id) = product_id.get() else {
            alert.set(Notification::error("Unknown product"));
            return;
        };
        let api = HttpProductsApi::new(config.clone());
        spawn_local(async move {
            match api.get(id).await {
                Ok(p) => {
                    product.try_set(Some(p));
                }
                Err(e) => {
                    log::error!("failed to load product {}: {}", id, e);
                    alert.try_set(Notification::error(format!(
                        "There was an error trying to load the product: {}",
                        e
                    )));
                }
            }
        });
    });

    // Navigation runs from an effect: callbacks must be Send + Sync.
    let leave = RwSignal::new(false);
    Effect::new(move |_| {
        if leave.get() {
            navigate(PRODUCTS_PATH, Default::default());
        }
    });

    let on_saved = Callback::new(move |_: Product| leave.set(true));
    let on_cancel = Callback::new(move |_: ()| leave.set(true));
    let on_failed = Callback::new(move |message: String| alert.set(Notification::error(message)));
    let close_alert = Callback::new(move |_: ()| alert.update(|n| *n = n.closed()));

    view! {
        <div class="page">
            <Alert alert=alert on_close=close_alert />
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || product_id.get().map(|id| format!("Edit product #{}", id)).unwrap_or_else(|| "Edit product".to_string())}
                    </h1>
                </div>
            </div>
            {move || product.get().map(|p| view! {
                <ProductForm product=p on_saved=on_saved on_failed=on_failed on_cancel=on_cancel />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("12"), Some(12));
        assert_eq!(parse_product_id(" 3 "), Some(3));
        assert_eq!(parse_product_id("0"), None);
        assert_eq!(parse_product_id("-4"), None);
        assert_eq!(parse_product_id("abc"), None);
    }
}
