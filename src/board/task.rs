/**
 * Task and User Types
 *
 * Wire types for the board page. Field names on the wire follow the
 * original task documents (`userId`, `createdFormatted`, `vip`,
 * `lastDonate`), so the embedded page state round-trips unchanged.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// One to-do item
///
/// The id is an opaque string assigned by the store on creation. The text
/// (`task`) is the only mutable field; owner id and display name are fixed
/// at creation time, the display name deliberately denormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, unique and never reused
    pub id: String,
    /// Creation timestamp, immutable
    pub created: DateTime<Utc>,
    /// Display-formatted creation date, derived, not authoritative
    #[serde(rename = "createdFormatted", skip_serializing_if = "Option::is_none")]
    pub created_formatted: Option<String>,
    /// Task text
    pub task: String,
    /// Owner identifier, the sole access filter
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Owner display name at creation time
    pub name: String,
}

/// Session-derived user summary embedded in the page props
///
/// Not persisted by this application; read once per page load from the
/// session provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardUser {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Supporter (VIP) flag, unlocks editing and the thank-you panel
    pub vip: bool,
    /// Timestamp of the last donation, present for supporters
    #[serde(rename = "lastDonate", skip_serializing_if = "Option::is_none")]
    pub last_donate: Option<DateTime<Utc>>,
}

impl BoardUser {
    /// Build the page's user summary from a resolved session
    pub fn from_session(session: &Session) -> Self {
        Self {
            id: session.user_id.clone(),
            name: session.name.clone(),
            vip: session.supporter,
            last_donate: session.last_donate,
        }
    }
}
