pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_category_table;
mod m20251001_000003_create_post_table;
mod m20251001_000004_create_comment_table;
mod m20251001_000005_create_chat_message_table;
mod m20251001_000006_create_file_table;
mod m20251001_000007_create_news_table;
mod m20251001_000008_create_activity_log_table;
mod m20251001_000009_create_doodle_table;
mod m20251001_000010_create_doodle_option_table;
mod m20251001_000011_create_doodle_response_table;
mod m20251001_000012_create_video_call_table;
mod m20251001_000013_create_video_call_participant_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_category_table::Migration),
            Box::new(m20251001_000003_create_post_table::Migration),
            Box::new(m20251001_000004_create_comment_table::Migration),
            Box::new(m20251001_000005_create_chat_message_table::Migration),
            Box::new(m20251001_000006_create_file_table::Migration),
            Box::new(m20251001_000007_create_news_table::Migration),
            Box::new(m20251001_000008_create_activity_log_table::Migration),
            Box::new(m20251001_000009_create_doodle_table::Migration),
            Box::new(m20251001_000010_create_doodle_option_table::Migration),
            Box::new(m20251001_000011_create_doodle_response_table::Migration),
            Box::new(m20251001_000012_create_video_call_table::Migration),
            Box::new(m20251001_000013_create_video_call_participant_table::Migration),
        ]
    }
}
