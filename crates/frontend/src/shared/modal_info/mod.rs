//! Info / confirmation dialog driven by a page-owned `Notification`.

use crate::shared::modal::Modal;
use contracts::shared::notification::{Notification, NotificationKind};
use leptos::prelude::*;
use thaw::*;

/// Which buttons the dialog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoActions {
    /// Confirm + Cancel
    Confirm,
    /// Single Dismiss
    Dismiss,
}

impl InfoActions {
    pub fn for_kind(kind: NotificationKind) -> Self {
        if kind.is_confirmation() {
            InfoActions::Confirm
        } else {
            InfoActions::Dismiss
        }
    }
}

pub fn info_title(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::ProductErased => "Delete product",
        NotificationKind::ProductCreated => "Product created",
        NotificationKind::Success => "Success",
        NotificationKind::Error => "Error",
    }
}

#[component]
pub fn ModalInfo(
    #[prop(into)] info: Signal<Notification>,
    /// Id passed to `on_delete` when a deletion is confirmed
    #[prop(into)]
    product_id: Signal<i64>,
    on_delete: Callback<i64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || info.with(|n| n.is_visible()));

    let handle_confirm = move |_| {
        on_delete.run(product_id.get_untracked());
        on_close.run(());
    };
    let handle_cancel = move |_| on_close.run(());

    view! {
        <Modal open=open on_close=on_close>
            {move || {
                let n = info.get();
                let actions = InfoActions::for_kind(n.kind);
                view! {
                    <div class=format!("modal-info modal-info--{}", n.kind.as_str().to_lowercase())>
                        <h3 class="modal-info__title">{info_title(n.kind)}</h3>
                        <p class="modal-info__message">{n.message}</p>
                        <div class="modal-info__actions">
                            {match actions {
                                InfoActions::Confirm => view! {
                                    <Button appearance=ButtonAppearance::Primary on_click=handle_confirm>
                                        "Confirm"
                                    </Button>
                                    <Button appearance=ButtonAppearance::Subtle on_click=handle_cancel>
                                        "Cancel"
                                    </Button>
                                }.into_any(),
                                InfoActions::Dismiss => view! {
                                    <Button appearance=ButtonAppearance::Primary on_click=handle_cancel>
                                        "Dismiss"
                                    </Button>
                                }.into_any(),
                            }}
                        </div>
                    </div>
                }
            }}
        </Modal>
    }
}
