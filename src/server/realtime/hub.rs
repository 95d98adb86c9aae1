//! Connection registry for the websocket channel.
//!
//! The hub maps socket ids to users and users to their sockets (one user may have several
//! tabs open), tracks which users sit in which call room, and remembers when the chat was
//! last active. Each socket owns an unbounded channel; the hub only pushes events into it.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{mpsc::UnboundedSender, RwLock};
use uuid::Uuid;

use crate::server::realtime::event::ServerEvent;

pub type SocketId = Uuid;

/// Quiet period after which a chat message alerts the admins.
pub const CHAT_QUIET_PERIOD: Duration = Duration::hours(2);

/// True when there was no chat activity yet or the last one is older than the quiet period.
pub fn should_notify_admins(last_activity: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    last_activity.is_none_or(|last| now - last > CHAT_QUIET_PERIOD)
}

struct Connection {
    user_id: i32,
    username: String,
    sender: UnboundedSender<ServerEvent>,
}

#[derive(Default)]
struct HubState {
    sockets: HashMap<SocketId, Connection>,
    users: HashMap<i32, HashSet<SocketId>>,
    call_rooms: HashMap<i32, HashSet<i32>>,
    last_chat_activity: Option<DateTime<Utc>>,
}

impl HubState {
    fn send_to_user(&self, user_id: i32, event: &ServerEvent) -> usize {
        let Some(sockets) = self.users.get(&user_id) else {
            return 0;
        };

        sockets
            .iter()
            .filter_map(|id| self.sockets.get(id))
            .filter(|conn| conn.sender.send(event.clone()).is_ok())
            .count()
    }
}

/// Result of a socket disconnecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub user_id: i32,
    pub username: String,
    /// The user has no sockets left.
    pub went_offline: bool,
    /// Call rooms the user was removed from because they went offline. Remaining members
    /// have already been told.
    pub left_calls: Vec<i32>,
}

#[derive(Clone, Default)]
pub struct Hub {
    state: Arc<RwLock<HubState>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a socket.
    ///
    /// # Returns
    /// - `(SocketId, bool)` - The new socket id and whether this is the user's first socket
    pub async fn connect(
        &self,
        user_id: i32,
        username: String,
        sender: UnboundedSender<ServerEvent>,
    ) -> (SocketId, bool) {
        let socket_id = Uuid::new_v4();
        let mut state = self.state.write().await;

        state.sockets.insert(
            socket_id,
            Connection {
                user_id,
                username,
                sender,
            },
        );
        let sockets = state.users.entry(user_id).or_default();
        sockets.insert(socket_id);

        (socket_id, sockets.len() == 1)
    }

    /// Unregisters a socket. A user losing their last socket also leaves every call room.
    pub async fn disconnect(&self, socket_id: SocketId) -> Option<Departure> {
        let mut state = self.state.write().await;
        let connection = state.sockets.remove(&socket_id)?;

        let went_offline = match state.users.get_mut(&connection.user_id) {
            Some(sockets) => {
                sockets.remove(&socket_id);
                sockets.is_empty()
            }
            None => true,
        };

        let mut left_calls = Vec::new();
        if went_offline {
            state.users.remove(&connection.user_id);
            state.call_rooms.retain(|call_id, members| {
                if members.remove(&connection.user_id) {
                    left_calls.push(*call_id);
                }
                !members.is_empty()
            });
            left_calls.sort_unstable();

            for call_id in &left_calls {
                let event = ServerEvent::UserLeftCall {
                    call_id: *call_id,
                    user_id: connection.user_id,
                };
                if let Some(members) = state.call_rooms.get(call_id) {
                    for member in members {
                        state.send_to_user(*member, &event);
                    }
                }
            }
        }

        Some(Departure {
            user_id: connection.user_id,
            username: connection.username,
            went_offline,
            left_calls,
        })
    }

    pub async fn is_online(&self, user_id: i32) -> bool {
        self.state.read().await.users.contains_key(&user_id)
    }

    /// Ids of users with at least one open socket, ascending.
    pub async fn online_user_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.state.read().await.users.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Sends `event` to every socket except `except`.
    ///
    /// # Returns
    /// - `usize` - Number of sockets the event was queued for
    pub async fn broadcast(&self, event: &ServerEvent, except: Option<SocketId>) -> usize {
        let state = self.state.read().await;

        state
            .sockets
            .iter()
            .filter(|(id, _)| Some(**id) != except)
            .filter(|(_, conn)| conn.sender.send(event.clone()).is_ok())
            .count()
    }

    /// Sends `event` to a single socket.
    pub async fn send_to_socket(&self, socket_id: SocketId, event: ServerEvent) -> bool {
        let state = self.state.read().await;

        state
            .sockets
            .get(&socket_id)
            .is_some_and(|conn| conn.sender.send(event).is_ok())
    }

    /// Sends `event` to every socket of `user_id`.
    pub async fn send_to_user(&self, user_id: i32, event: &ServerEvent) -> usize {
        self.state.read().await.send_to_user(user_id, event)
    }

    /// Adds a user to a call room and tells the other members.
    ///
    /// # Returns
    /// - `Vec<i32>` - Members already in the room, ascending
    pub async fn join_call(&self, call_id: i32, user_id: i32, username: &str) -> Vec<i32> {
        let mut state = self.state.write().await;
        let members = state.call_rooms.entry(call_id).or_default();
        members.insert(user_id);

        let mut others: Vec<i32> = members.iter().copied().filter(|id| *id != user_id).collect();
        others.sort_unstable();

        let event = ServerEvent::UserJoinedCall {
            call_id,
            user_id,
            username: username.to_string(),
        };
        for other in &others {
            state.send_to_user(*other, &event);
        }

        others
    }

    /// Removes a user from a call room and tells the remaining members.
    pub async fn leave_call(&self, call_id: i32, user_id: i32) {
        let mut state = self.state.write().await;
        let Some(members) = state.call_rooms.get_mut(&call_id) else {
            return;
        };
        if !members.remove(&user_id) {
            return;
        }

        let remaining: Vec<i32> = members.iter().copied().collect();
        if remaining.is_empty() {
            state.call_rooms.remove(&call_id);
        }

        let event = ServerEvent::UserLeftCall { call_id, user_id };
        for member in remaining {
            state.send_to_user(member, &event);
        }
    }

    pub async fn call_members(&self, call_id: i32) -> Vec<i32> {
        let state = self.state.read().await;
        let mut members: Vec<i32> = state
            .call_rooms
            .get(&call_id)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default();
        members.sort_unstable();
        members
    }

    /// Forwards a signaling event from `from_user_id`.
    ///
    /// With a target the event goes to that user's sockets; without one, to every other
    /// member of the call room. The sender must be in the room.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of sockets reached
    /// - `Err(String)` - The sender or the named recipient is not a member of the call
    pub async fn relay(
        &self,
        call_id: i32,
        from_user_id: i32,
        to_user_id: Option<i32>,
        event: ServerEvent,
    ) -> Result<usize, String> {
        let state = self.state.read().await;
        let members = state
            .call_rooms
            .get(&call_id)
            .filter(|members| members.contains(&from_user_id))
            .filter(|members| to_user_id.map_or(true, |target| members.contains(&target)))
            .ok_or_else(|| format!("You are not in call {}", call_id))?;

        let delivered = match to_user_id {
            Some(target) => state.send_to_user(target, &event),
            None => members
                .iter()
                .filter(|member| **member != from_user_id)
                .map(|member| state.send_to_user(*member, &event))
                .sum(),
        };

        Ok(delivered)
    }

    /// Stamps chat activity at `now`.
    ///
    /// # Returns
    /// - `bool` - Whether the previous activity was long enough ago to alert admins
    pub async fn record_chat_activity(&self, now: DateTime<Utc>) -> bool {
        let mut state = self.state.write().await;
        let notify = should_notify_admins(state.last_chat_activity, now);
        state.last_chat_activity = Some(now);
        notify
    }
}
