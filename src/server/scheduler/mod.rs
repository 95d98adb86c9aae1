//! Background jobs.
//!
//! - `backup` - Periodic database backups to Dropbox, controllable at runtime
//! - `presence` - Hourly cleanup of stale `last_seen` timestamps

pub mod backup;
pub mod presence;
