use serde::{Deserialize, Serialize};

use crate::record::{ExtraFields, RecordId};

/// Admin notification shown in the navigation shell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the operator has seen it.
    #[serde(alias = "isRead")]
    pub read: bool,
    /// When it was raised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Notifications plus the unread badge count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    /// Notifications, newest first as returned by the platform.
    pub items: Vec<Notification>,
    /// Unread notifications.
    pub unread: usize,
}

impl NotificationFeed {
    /// Builds a feed and counts unread items.
    #[must_use]
    pub fn new(items: Vec<Notification>) -> Self {
        let unread = items.iter().filter(|item| !item.read).count();
        Self { items, unread }
    }
}
