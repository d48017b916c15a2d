//! Push notification relay.
//!
//! Parses incoming push payloads, builds the displayed notification, and
//! defines the action identifiers the click handler reacts to.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::debug;

use crate::config::NotificationStyle;

/// Action identifier for the "view" button and the default body click.
pub const ACTION_VIEW: &str = "view";
/// Action identifier for the "dismiss" button.
pub const ACTION_DISMISS: &str = "dismiss";

fn default_target() -> SmolStr {
    SmolStr::new_static("/")
}

/// Structured data carried by a push message.
///
/// Not persisted; it lives for the duration of one push event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    /// Notification title; the configured default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<SmolStr>,
    /// Notification body text.
    #[serde(default)]
    pub body: SmolStr,
    /// Navigation target for the click handler.
    #[serde(default = "default_target")]
    pub url: SmolStr,
    /// Collapse tag; the configured canonical tag applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<SmolStr>,
}

impl Default for PushPayload {
    fn default() -> Self {
        Self {
            title: None,
            body: SmolStr::default(),
            url: default_target(),
            tag: None,
        }
    }
}

impl PushPayload {
    /// Parses a push message.
    ///
    /// Malformed payloads degrade to a plain-text body under the default
    /// title; a push is never dropped for being unparsable.
    pub fn parse(data: &[u8]) -> Self {
        match serde_json::from_slice(data) {
            Ok(payload) => payload,
            Err(error) => {
                debug!(error = %error, "push payload is not structured, using raw text");
                Self {
                    body: SmolStr::new(String::from_utf8_lossy(data)),
                    ..Self::default()
                }
            }
        }
    }
}

/// One button on a displayed notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Identifier reported back on interaction.
    pub action: SmolStr,
    /// Button label.
    pub title: SmolStr,
}

/// A notification ready for display by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebNotification {
    /// Title line.
    pub title: SmolStr,
    /// Body text.
    pub body: SmolStr,
    /// Icon path.
    pub icon: SmolStr,
    /// Badge path.
    pub badge: SmolStr,
    /// Collapse tag: a new notification with the same tag replaces the
    /// previous one rather than stacking.
    pub tag: SmolStr,
    /// Navigation target carried through to the click handler.
    pub url: SmolStr,
    /// Action buttons.
    pub actions: Vec<NotificationAction>,
}

impl WebNotification {
    /// Builds the displayed notification from a parsed payload and the
    /// configured styling.
    pub fn from_payload(payload: PushPayload, style: &NotificationStyle) -> Self {
        Self {
            title: payload.title.unwrap_or_else(|| style.default_title.clone()),
            body: payload.body,
            icon: style.icon.clone(),
            badge: style.badge.clone(),
            tag: payload.tag.unwrap_or_else(|| style.tag.clone()),
            url: payload.url,
            actions: vec![
                NotificationAction {
                    action: SmolStr::new_static(ACTION_VIEW),
                    title: SmolStr::new_static("Ver"),
                },
                NotificationAction {
                    action: SmolStr::new_static(ACTION_DISMISS),
                    title: SmolStr::new_static("Descartar"),
                },
            ],
        }
    }
}

/// The host's notification-display primitive.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Displays (or replaces, by tag) a notification.
    async fn show(&self, notification: WebNotification);
}

#[async_trait]
impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    async fn show(&self, notification: WebNotification) {
        (**self).show(notification).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_payload_parses() {
        let payload = PushPayload::parse(
            br#"{"title":"Order shipped","body":"Your item is on its way","url":"/compras.html"}"#,
        );
        assert_eq!(payload.title.as_deref(), Some("Order shipped"));
        assert_eq!(payload.body, "Your item is on its way");
        assert_eq!(payload.url, "/compras.html");
        assert_eq!(payload.tag, None);
    }

    #[test]
    fn malformed_payload_degrades_to_plain_text() {
        let payload = PushPayload::parse(b"pedido confirmado");
        assert_eq!(payload.title, None);
        assert_eq!(payload.body, "pedido confirmado");
        assert_eq!(payload.url, "/");
    }

    #[test]
    fn notification_applies_configured_defaults() {
        let style = NotificationStyle::default();
        let notification =
            WebNotification::from_payload(PushPayload::parse(b"not json"), &style);
        assert_eq!(notification.title, style.default_title);
        assert_eq!(notification.tag, style.tag);
        assert_eq!(notification.actions.len(), 2);
        assert_eq!(notification.actions[0].action, ACTION_VIEW);
        assert_eq!(notification.actions[1].action, ACTION_DISMISS);
    }

    #[test]
    fn payload_tag_overrides_canonical_tag() {
        let style = NotificationStyle::default();
        let payload = PushPayload::parse(br#"{"body":"b","tag":"pedido-7"}"#);
        let notification = WebNotification::from_payload(payload, &style);
        assert_eq!(notification.tag, "pedido-7");
    }
}
