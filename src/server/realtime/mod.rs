//! Realtime messaging over websockets.
//!
//! The hub keeps the set of live sockets and call rooms in memory; `socket` upgrades
//! authenticated requests and translates client events into hub and service calls.

pub mod event;
pub mod hub;
pub mod socket;
