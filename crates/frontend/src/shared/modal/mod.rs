use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Run `on_close` on the next tick.
///
/// The overlay is removed synchronously when the parent flips its flag; doing
/// that during the overlay's own click dispatch makes Leptos event delegation
/// call a dropped handler.
fn close_deferred(on_close: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        on_close.run(());
    });
}

/// Overlay dialog whose visibility is owned by the parent.
///
/// Closes through `on_close` on overlay click, Escape, or the close button;
/// the parent decides what closing means (usually setting its flag to false).
#[component]
pub fn Modal(
    /// Visibility flag held by the parent
    #[prop(into)]
    open: Signal<bool>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional title shown in the header
    #[prop(optional, into)]
    title: Option<String>,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    // Only close when the press started on the overlay itself, so selecting
    // text inside the dialog and releasing outside keeps it open.
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred(on_close);
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| close_deferred(on_close);

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-overlay"
                on:mousedown=handle_overlay_mouse_down
                on:click=handle_overlay_click
            >
                <div class="modal" on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.clone().unwrap_or_default()}</h2>
                        <div class="modal-header-actions">
                            <button type="button" class="button button--icon modal__close" on:click=handle_close>
                                {icon("x")}
                            </button>
                        </div>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
