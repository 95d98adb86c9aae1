pub use super::activity_log::Entity as ActivityLog;
pub use super::category::Entity as Category;
pub use super::chat_message::Entity as ChatMessage;
pub use super::comment::Entity as Comment;
pub use super::doodle::Entity as Doodle;
pub use super::doodle_option::Entity as DoodleOption;
pub use super::doodle_response::Entity as DoodleResponse;
pub use super::file::Entity as File;
pub use super::news::Entity as News;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
pub use super::video_call::Entity as VideoCall;
pub use super::video_call_participant::Entity as VideoCallParticipant;
