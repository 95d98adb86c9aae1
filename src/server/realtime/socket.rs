//! Websocket endpoint.
//!
//! Each connection gets a writer task draining its hub channel into the socket, while the
//! read loop dispatches client events. Presence is broadcast when a user's first socket
//! opens and when their last socket closes.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::server::{
    data::video_call::VideoCallRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::authenticate,
    model::{user::User, video_call::CallStatus},
    realtime::{
        event::{ClientEvent, RelayedSignal, ServerEvent, Signal},
        hub::{Hub, SocketId},
    },
    service::{
        chat::ChatService, notification::dispatcher::Notifier, presence::PresenceService,
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct WsQuery {
    pub token: Option<String>,
}

/// Upgrades to a websocket after validating the `token` query parameter.
///
/// # Returns
/// - `101 Switching Protocols` - Authenticated upgrade
/// - `401 Unauthorized` - Missing or invalid token, or inactive user
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let token = query.token.ok_or(AuthError::InvalidToken)?;
    let user = authenticate(&state.db, &state.tokens, &token).await?;

    Ok(ws.on_upgrade(move |socket| handle_socket(state, user, socket)))
}

async fn handle_socket(state: AppState, user: User, socket: WebSocket) {
    let (mut sink, mut stream) = socket.split();
    let (sender, mut receiver) = mpsc::unbounded_channel::<ServerEvent>();

    let (socket_id, first) = state.hub.connect(user.id, user.name.clone(), sender).await;
    tracing::info!("Websocket {} opened for {}", socket_id, user.name);

    if let Err(e) = PresenceService::new(&state.db).touch(user.id).await {
        tracing::warn!("Failed to refresh presence for {}: {}", user.name, e);
    }
    if first {
        let online = ServerEvent::PresenceUpdate {
            user_id: user.id,
            username: user.name.clone(),
            online: true,
        };
        state.hub.broadcast(&online, Some(socket_id)).await;
    }
    let user_ids = state.hub.online_user_ids().await;
    state
        .hub
        .send_to_socket(socket_id, ServerEvent::OnlineUsers { user_ids })
        .await;

    let mut writer = tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            let text = match serde_json::to_string(&event) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("Failed to encode websocket event: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let context = EventContext {
        db: &state.db,
        hub: &state.hub,
        notifier: &state.notifier,
        user: &user,
        socket_id,
    };

    loop {
        tokio::select! {
            message = stream.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    let reply = match serde_json::from_str::<ClientEvent>(text.as_str()) {
                        Ok(event) => context.handle(event).await.err().map(client_error),
                        Err(e) => Some(ServerEvent::error(format!("Invalid event: {}", e))),
                    };
                    if let Some(reply) = reply {
                        state.hub.send_to_socket(socket_id, reply).await;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::debug!("Websocket {} errored: {}", socket_id, e);
                    break;
                }
            },
            _ = &mut writer => break,
        }
    }

    writer.abort();

    if let Some(departure) = state.hub.disconnect(socket_id).await {
        if departure.went_offline {
            let offline = ServerEvent::PresenceUpdate {
                user_id: departure.user_id,
                username: departure.username,
                online: false,
            };
            state.hub.broadcast(&offline, None).await;
        }
    }

    tracing::info!("Websocket {} closed for {}", socket_id, user.name);
}

/// Everything a client event may touch on behalf of one socket.
pub struct EventContext<'a> {
    pub db: &'a DatabaseConnection,
    pub hub: &'a Hub,
    pub notifier: &'a Notifier,
    pub user: &'a User,
    pub socket_id: SocketId,
}

impl EventContext<'_> {
    /// Applies one client event. Errors are reported back to the sending socket only.
    pub async fn handle(&self, event: ClientEvent) -> Result<(), AppError> {
        match event {
            ClientEvent::SendMessage { message } => {
                ChatService::new(self.db, self.hub, self.notifier)
                    .send(self.user, &message, Some(self.socket_id))
                    .await?;
            }
            ClientEvent::JoinCall { call_id } => self.join_call(call_id).await?,
            ClientEvent::LeaveCall { call_id } => {
                self.hub.leave_call(call_id, self.user.id).await;
            }
            ClientEvent::CallOffer(signal) => {
                self.relay(signal, ServerEvent::CallOffer).await?;
            }
            ClientEvent::CallAnswer(signal) => {
                self.relay(signal, ServerEvent::CallAnswer).await?;
            }
            ClientEvent::IceCandidate(signal) => {
                self.relay(signal, ServerEvent::IceCandidate).await?;
            }
            ClientEvent::Ping => {
                PresenceService::new(self.db).touch(self.user.id).await?;
                self.hub.send_to_socket(self.socket_id, ServerEvent::Pong).await;
            }
        }
        Ok(())
    }

    async fn join_call(&self, call_id: i32) -> Result<(), AppError> {
        let call = VideoCallRepository::new(self.db)
            .find_by_id(call_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Call not found".to_string()))?;

        if call.status == CallStatus::Ended {
            return Err(AppError::BadRequest("Call has already ended".to_string()));
        }
        if !call.is_invited(self.user.id) {
            return Err(AppError::Forbidden(
                "You are not invited to this call".to_string(),
            ));
        }

        self.hub
            .join_call(call_id, self.user.id, &self.user.name)
            .await;

        Ok(())
    }

    async fn relay(
        &self,
        signal: Signal,
        wrap: impl FnOnce(RelayedSignal) -> ServerEvent,
    ) -> Result<(), AppError> {
        let event = wrap(RelayedSignal {
            call_id: signal.call_id,
            from_user_id: self.user.id,
            payload: signal.payload,
        });

        self.hub
            .relay(signal.call_id, self.user.id, signal.to_user_id, event)
            .await
            .map_err(AppError::BadRequest)?;

        Ok(())
    }
}

/// Maps a failed event to the message shown to the client.
pub fn client_error(err: AppError) -> ServerEvent {
    match err {
        AppError::BadRequest(message)
        | AppError::NotFound(message)
        | AppError::Forbidden(message) => ServerEvent::error(message),
        err => {
            tracing::error!("Websocket event failed: {}", err);
            ServerEvent::error("Internal server error")
        }
    }
}
