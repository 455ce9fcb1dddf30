use crate::domain::products::ui::edit::EditProduct;
use crate::domain::products::ui::list::ProductsList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">{"Page not found"}</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="dashboard">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductsList />
                    <Route path=path!("/dashboard/products") view=ProductsList />
                    <Route path=path!("/dashboard/edit/:id") view=EditProduct />
                </Routes>
            </main>
        </Router>
    }
}
