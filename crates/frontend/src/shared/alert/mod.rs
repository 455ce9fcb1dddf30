//! Inline notification banner.

pub mod auto_dismiss;

use crate::shared::icons::icon;
use auto_dismiss::AutoDismiss;
use contracts::shared::notification::{Notification, NotificationKind, AUTO_CLOSE_DELAY_MS};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// BEM modifier for the banner background/text.
///
/// Created and plain success share the green style, errors are red,
/// anything else (a confirmation prompt routed here by mistake) is neutral.
pub fn alert_modifier(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::ProductCreated | NotificationKind::Success => "alert--success",
        NotificationKind::Error => "alert--error",
        NotificationKind::ProductErased => "alert--neutral",
    }
}

/// Dismissible banner bound to a page-owned notification.
///
/// Nothing is rendered while the notification is inactive. An auto-closing
/// `ProductCreated` notification calls `on_close` once after 9 s; the timer
/// is cancelled when the notification changes, on dismiss, and on unmount.
#[component]
pub fn Alert(
    #[prop(into)] alert: Signal<Notification>,
    on_close: Callback<()>,
) -> impl IntoView {
    let timer = StoredValue::new_local(AutoDismiss::<Timeout>::new());

    // Re-arm only when the notification itself changed.
    Effect::new(move |prev: Option<Notification>| {
        let current = alert.get();
        if prev.as_ref() == Some(&current) {
            return current;
        }
        timer.update_value(|slot| {
            let armed = slot.arm(&current, |delay| {
                Timeout::new(delay, move || {
                    log::debug!("alert auto-dismissed");
                    on_close.run(());
                })
            });
            if armed {
                log::debug!("alert will auto-dismiss in {} ms", AUTO_CLOSE_DELAY_MS);
            }
        });
        current
    });

    on_cleanup(move || {
        timer.try_update_value(|slot| slot.disarm());
    });

    let handle_close = move |_| {
        timer.update_value(|slot| slot.disarm());
        on_close.run(());
    };

    view! {
        <Show when=move || alert.with(|n| n.is_visible())>
            {move || {
                let n = alert.get();
                view! {
                    <div class=format!("alert {}", alert_modifier(n.kind)) role="alert">
                        <div class="alert__body">
                            <div class="alert__message">{n.message}</div>
                            <button type="button" class="button button--icon alert__close" on:click=handle_close>
                                {icon("x-circle")}
                            </button>
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_per_kind() {
        assert_eq!(alert_modifier(NotificationKind::ProductCreated), "alert--success");
        assert_eq!(alert_modifier(NotificationKind::Success), "alert--success");
        assert_eq!(alert_modifier(NotificationKind::Error), "alert--error");
        assert_eq!(alert_modifier(NotificationKind::ProductErased), "alert--neutral");
    }
}
