//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories insert rows, so the
//! relevant tables must exist (see `TestBuilder`).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let post = factory::post::create_post(&db, &user).await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .name("root")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod activity_log;
pub mod category;
pub mod chat_message;
pub mod comment;
pub mod doodle;
pub mod file;
pub mod helpers;
pub mod news;
pub mod post;
pub mod user;
pub mod video_call;

pub use category::create_category;
pub use comment::create_comment;
pub use post::create_post;
pub use user::create_user;
