//! Yskandar community backend.
//!
//! Everything the API serves lives here: posts, comments, chat, files, news, polls, video call
//! rooms and backups, plus the websocket hub that pushes chat and presence to clients.
//!
//! # Layers
//!
//! Handlers in `controller/` authenticate through `middleware::auth`, map DTOs into params and call
//! a service. Services in `service/` enforce ownership and validation, call repositories in
//! `data/`, and hand side effects (mail, Telegram) to the notifier. Repositories convert SeaORM
//! rows into the types in `model/` so nothing above them sees an entity.
//!
//! # Supporting modules
//!
//! - `config`, `startup`, `state` and `router` wire the process together at boot.
//! - `integration/` holds the SMTP, Telegram, Cloudinary and Dropbox clients.
//! - `realtime/` is the websocket hub; `scheduler/` runs backups and presence cleanup.
//! - `util/` parses path ids and request metadata and validates input.


pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod middleware;
pub mod model;
pub mod realtime;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
