mod activity_log;
mod category;
mod chat_message;
mod doodle;
mod file;
mod news;
mod post;
mod user;
mod video_call;
