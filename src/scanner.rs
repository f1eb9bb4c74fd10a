//! Dialog scanning and entity classification
//!
//! One pass over the account's dialog list: dialogs whose last activity falls
//! inside the lookback window become [`DialogRecord`]s, in iteration order.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use grammers_client::types::peer::Peer;
use grammers_client::types::Dialog;
use grammers_client::Client;

use crate::config::NAME_PLACEHOLDER;
use crate::error::Result;

/// Chat category of an output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatType {
    User,
    Group,
    Supergroup,
    Channel,
    Unknown,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::User => "user",
            ChatType::Group => "group",
            ChatType::Supergroup => "supergroup",
            ChatType::Channel => "channel",
            ChatType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ChatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw entity kind as reported by Telegram, before chat-type mapping.
///
/// `Channel` covers every large/broadcast-capable entity; the broadcast flag
/// decides between a channel proper and a supergroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Chat,
    Channel,
    Unknown,
}

/// Map an entity kind and its broadcast flag to a chat type.
pub fn classify(kind: EntityKind, broadcast: bool) -> ChatType {
    match kind {
        EntityKind::User => ChatType::User,
        EntityKind::Chat => ChatType::Group,
        EntityKind::Channel => {
            if broadcast {
                ChatType::Channel
            } else {
                ChatType::Supergroup
            }
        }
        EntityKind::Unknown => ChatType::Unknown,
    }
}

/// One row of scan output.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRecord {
    pub chat_id: i64,
    pub chat_name: String,
    pub chat_type: ChatType,
    pub last_message_date: DateTime<Utc>,
    pub unread_count: i32,
}

/// Whether a dialog's last activity falls inside the lookback window.
///
/// The boundary is inclusive: activity exactly at the cutoff qualifies.
pub fn qualifies(last_message: DateTime<Utc>, cutoff: DateTime<Utc>) -> bool {
    last_message >= cutoff
}

/// Scan the account's dialogs for activity within the last `days_back` days.
///
/// The cutoff is computed once at call start so the whole pass filters
/// against one consistent instant. Dialogs without a last message are
/// skipped. Each match is echoed to stdout for operator feedback.
pub async fn scan_dialogs(client: &Client, days_back: i64) -> Result<Vec<DialogRecord>> {
    println!(
        "Сканирование активных чатов за последние {} дней...",
        days_back
    );

    let cutoff = Utc::now() - Duration::days(days_back);
    let mut results: Vec<DialogRecord> = Vec::new();
    let mut dialogs = client.iter_dialogs();

    while let Some(dialog) = dialogs.next().await? {
        let Some(last_message) = dialog.last_message.as_ref() else {
            continue;
        };
        let date = last_message.date();
        if !qualifies(date, cutoff) {
            continue;
        }

        let record = record_from_dialog(&dialog, date);
        println!(
            "Найден активный чат: {} ({})",
            record.chat_name, record.chat_type
        );
        results.push(record);
    }

    Ok(results)
}

fn record_from_dialog(dialog: &Dialog, date: DateTime<Utc>) -> DialogRecord {
    let peer = &dialog.peer;
    let (kind, broadcast) = entity_kind(peer);

    DialogRecord {
        chat_id: peer_id(peer),
        chat_name: display_name(&peer_title(peer)),
        chat_type: classify(kind, broadcast),
        last_message_date: date,
        unread_count: unread_count(dialog).max(0),
    }
}

/// Extract the entity kind and broadcast flag from a dialog peer.
///
/// Empty and forbidden raw entities carry no usable metadata and fall
/// through to `Unknown`.
fn entity_kind(peer: &Peer) -> (EntityKind, bool) {
    match peer {
        Peer::User(user) => match &user.raw {
            grammers_tl_types::enums::User::User(_) => (EntityKind::User, false),
            grammers_tl_types::enums::User::Empty(_) => (EntityKind::Unknown, false),
        },
        Peer::Group(group) => match &group.raw {
            grammers_tl_types::enums::Chat::Chat(_) => (EntityKind::Chat, false),
            grammers_tl_types::enums::Chat::Channel(c) => (EntityKind::Channel, c.broadcast),
            grammers_tl_types::enums::Chat::Empty(_)
            | grammers_tl_types::enums::Chat::Forbidden(_)
            | grammers_tl_types::enums::Chat::ChannelForbidden(_) => (EntityKind::Unknown, false),
        },
        Peer::Channel(channel) => (EntityKind::Channel, channel.raw.broadcast),
    }
}

fn peer_title(peer: &Peer) -> String {
    match peer {
        Peer::Channel(c) => c.title().to_string(),
        Peer::Group(g) => g.title().unwrap_or_default().to_string(),
        Peer::User(u) => u.full_name(),
    }
}

fn peer_id(peer: &Peer) -> i64 {
    match peer {
        Peer::Channel(c) => c.raw.id,
        Peer::Group(g) => match &g.raw {
            grammers_tl_types::enums::Chat::Empty(c) => c.id,
            grammers_tl_types::enums::Chat::Chat(c) => c.id,
            grammers_tl_types::enums::Chat::Forbidden(c) => c.id,
            grammers_tl_types::enums::Chat::Channel(c) => c.id,
            grammers_tl_types::enums::Chat::ChannelForbidden(c) => c.id,
        },
        Peer::User(u) => u.raw.id(),
    }
}

fn unread_count(dialog: &Dialog) -> i32 {
    match &dialog.raw {
        grammers_tl_types::enums::Dialog::Dialog(d) => d.unread_count,
        grammers_tl_types::enums::Dialog::Folder(folder) => {
            folder.unread_muted_messages_count + folder.unread_unmuted_messages_count
        }
    }
}

fn display_name(raw: &str) -> String {
    if raw.trim().is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        raw.to_string()
    }
}
