use crate::domain::products::api::{HttpProductsApi, ProductsApi};
use crate::domain::products::state::{alert_memo, create_state, delete_product, modal_info_memo};
use crate::domain::products::ui::form::ProductForm;
use crate::shared::alert::Alert;
use crate::shared::api_utils::ApiConfig;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::modal_info::ModalInfo;
use crate::shared::number_format::format_price;
use contracts::domain::products::Product;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

pub const PRODUCTS_PATH: &str = "/dashboard/products";

/// Route of the edit page for a product.
pub fn edit_href(id: i64) -> String {
    format!("/dashboard/edit/{}", id)
}

#[component]
#[allow(non_snake_case)]
pub fn ProductsList() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_env);
    let api = HttpProductsApi::new(config);
    let state = create_state();

    // Reload on mount and whenever either notification surface changes.
    let reload_trigger = Memo::new(move |_| {
        state.with(|s| (s.modal_info.clone(), s.alert.clone()))
    });

    let fetch = {
        let api = api.clone();
        move || {
            let Some(ticket) = state.try_update(|s| s.begin_load()) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.list().await;
                state.try_update(|s| s.apply_loaded(ticket, result));
            });
        }
    };

    Effect::new({
        let fetch = fetch.clone();
        move |_| {
            reload_trigger.track();
            fetch();
        }
    });

    let refresh = fetch.clone();
    let request_delete = move |id: i64| state.update(|s| s.request_delete(id));

    let handle_delete = Callback::new({
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                let outcome = delete_product(&api, id).await;
                state.try_update(|s| s.apply_delete(&outcome));
            });
        }
    });

    let close_modal_info = Callback::new(move |_: ()| state.update(|s| s.close_modal_info()));
    let close_alert = Callback::new(move |_: ()| state.update(|s| s.close_alert()));
    let close_form = Callback::new(move |_: ()| state.update(|s| s.close_form()));
    let on_created = Callback::new(move |p: Product| state.update(|s| s.product_created(&p)));
    let on_form_failed = Callback::new(move |message: String| state.update(|s| s.form_failed(message)));

    let alert = alert_memo(state);
    let modal_info = modal_info_memo(state);
    let pending_delete_id = Signal::derive(move || state.with(|s| s.pending_delete_id));
    let form_open = Signal::derive(move || state.with(|s| s.form_open));

    view! {
        <div class="page">
            <Alert alert=alert on_close=close_alert />

            <Modal open=form_open on_close=close_form title="Add product">
                <ProductForm on_saved=on_created on_failed=on_form_failed on_cancel=close_form />
            </Modal>

            <ModalInfo
                info=modal_info
                product_id=pending_delete_id
                on_delete=handle_delete
                on_close=close_modal_info
            />

            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"List of products"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| state.update(|s| s.open_create_form())
                    >
                        {icon("plus")}
                        {"Add product"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell">{"Price"}</th>
                            <th class="table__header-cell">{"Id"}</th>
                            <th class="table__header-cell"><span class="sr-only">{"Edit"}</span></th>
                            <th class="table__header-cell"><span class="sr-only">{"Delete"}</span></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.products.clone())
                            key=|p| p.id
                            children=move |product: Product| {
                                let id = product.id;
                                let thumbnail = product.thumbnail().map(str::to_string);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <div class="product-cell">
                                                {thumbnail.map(|src| view! {
                                                    <img class="product-cell__image" src=src alt="" />
                                                })}
                                                <span class="product-cell__title">{product.title}</span>
                                            </div>
                                        </td>
                                        <td class="table__cell">
                                            <div>{product.category.name}</div>
                                            <div class="table__cell--muted">{format!("Id: #{}", product.category.id)}</div>
                                        </td>
                                        <td class="table__cell">
                                            <span class="badge badge--success">{format_price(product.price)}</span>
                                        </td>
                                        <td class="table__cell table__cell--muted">{id}</td>
                                        <td class="table__cell table__cell--right">
                                            <A href=edit_href(id)>{"Edit"}</A>
                                        </td>
                                        <td class="table__cell table__cell--right">
                                            <button
                                                class="button button--icon button--danger"
                                                on:click=move |_| request_delete(id)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.is_loaded && s.products.is_empty())>
                    <div class="table__empty">{"No products yet"}</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_href() {
        assert_eq!(edit_href(17), "/dashboard/edit/17");
    }
}
