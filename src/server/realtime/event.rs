//! JSON events exchanged over the websocket.
//!
//! Both directions use an internally tagged representation: `{"type": "send_message", ...}`.
//! Signaling payloads (SDP offers/answers, ICE candidates) are opaque JSON that the server
//! forwards untouched.

use serde::{Deserialize, Serialize};

use crate::model::chat::ChatMessageDto;

/// Call setup message sent by a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signal {
    pub call_id: i32,
    /// Recipient; `None` relays to every other member of the call.
    #[serde(default)]
    pub to_user_id: Option<i32>,
    pub payload: serde_json::Value,
}

/// Call setup message as delivered to the recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayedSignal {
    pub call_id: i32,
    pub from_user_id: i32,
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    SendMessage { message: String },
    JoinCall { call_id: i32 },
    LeaveCall { call_id: i32 },
    CallOffer(Signal),
    CallAnswer(Signal),
    IceCandidate(Signal),
    /// Keepalive; refreshes presence.
    Ping,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    ReceiveMessage(ChatMessageDto),
    PresenceUpdate {
        user_id: i32,
        username: String,
        online: bool,
    },
    OnlineUsers {
        user_ids: Vec<i32>,
    },
    CallOffer(RelayedSignal),
    CallAnswer(RelayedSignal),
    IceCandidate(RelayedSignal),
    UserJoinedCall {
        call_id: i32,
        user_id: i32,
        username: String,
    },
    UserLeftCall {
        call_id: i32,
        user_id: i32,
    },
    Error {
        message: String,
    },
    Pong,
}

impl ServerEvent {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
