use serde::{Deserialize, Serialize};

/// Вид уведомления. Строковые значения совпадают с константами API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    ProductCreated,
    /// Запрос подтверждения удаления
    #[serde(rename = "PRODUCT_ERRASED")]
    ProductErased,
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ProductCreated => "PRODUCT_CREATED",
            NotificationKind::ProductErased => "PRODUCT_ERRASED",
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Error => "ERROR",
        }
    }

    pub fn is_confirmation(&self) -> bool {
        matches!(self, NotificationKind::ProductErased)
    }
}

/// Milliseconds before an auto-closing `ProductCreated` alert dismisses itself.
pub const AUTO_CLOSE_DELAY_MS: u32 = 9_000;

/// Transient message shown on the inline alert or in the info modal.
///
/// Each surface holds exactly one value; raising a new one replaces the old.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    #[serde(rename = "autoClose", default)]
    pub auto_close: bool,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            active: true,
            kind,
            message: message.into(),
            auto_close: false,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn product_created(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::ProductCreated, message).with_auto_close(true)
    }

    pub fn confirm_delete(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::ProductErased, message)
    }

    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.active
    }

    /// Only an active `ProductCreated` with `auto_close` set dismisses itself.
    pub fn should_auto_close(&self) -> bool {
        self.active && self.auto_close && self.kind == NotificationKind::ProductCreated
    }

    /// Same notification with `active` cleared.
    pub fn closed(&self) -> Self {
        Self {
            active: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::ProductErased).unwrap(),
            r#""PRODUCT_ERRASED""#
        );
        assert_eq!(
            serde_json::to_string(&NotificationKind::ProductCreated).unwrap(),
            r#""PRODUCT_CREATED""#
        );
        for kind in [
            NotificationKind::ProductCreated,
            NotificationKind::ProductErased,
            NotificationKind::Success,
            NotificationKind::Error,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_default_is_inactive() {
        let n = Notification::default();
        assert!(!n.is_visible());
        assert!(!n.should_auto_close());
    }

    #[test]
    fn test_auto_close_only_for_product_created() {
        assert!(Notification::product_created("ok").should_auto_close());
        assert!(!Notification::success("ok").with_auto_close(true).should_auto_close());
        assert!(!Notification::error("no").with_auto_close(true).should_auto_close());
        assert!(!Notification::confirm_delete("?")
            .with_auto_close(true)
            .should_auto_close());
        assert!(!Notification::product_created("ok").closed().should_auto_close());
    }

    #[test]
    fn test_closed_keeps_message() {
        let n = Notification::error("boom").closed();
        assert!(!n.active);
        assert_eq!(n.message, "boom");
        assert_eq!(n.kind, NotificationKind::Error);
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{"active":true,"type":"PRODUCT_CREATED","message":"Created","autoClose":true}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert!(n.should_auto_close());
    }
}
