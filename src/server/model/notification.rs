//! Email broadcast outcomes and recipient overviews.

use crate::{
    model::notification::{
        BroadcastResultDto, PreferenceCountsDto, RecipientDto, RecipientSummaryDto,
    },
    server::model::user::User,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastOutcome {
    pub success: bool,
    pub message: String,
    pub sent_count: usize,
    pub total_users: usize,
}

impl BroadcastOutcome {
    pub fn into_dto(self) -> BroadcastResultDto {
        BroadcastResultDto {
            success: self.success,
            message: self.message,
            sent_count: self.sent_count,
            total_users: self.total_users,
        }
    }
}

/// Subscriber counts per email preference among active users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceCounts {
    pub new_posts: usize,
    pub admin_notifications: usize,
    pub comment_replies: usize,
    pub new_comments: usize,
    pub weekly_digest: usize,
}

#[derive(Debug, Clone)]
pub struct RecipientSummary {
    pub total_active_users: usize,
    pub subscribed: PreferenceCounts,
    pub admin_notification_recipients: Vec<User>,
    pub new_post_recipients: Vec<User>,
}

impl RecipientSummary {
    pub fn from_active_users(users: Vec<User>) -> Self {
        let mut subscribed = PreferenceCounts::default();
        for user in &users {
            let prefs = user.email_preferences;
            subscribed.new_posts += prefs.new_posts as usize;
            subscribed.admin_notifications += prefs.admin_notifications as usize;
            subscribed.comment_replies += prefs.comment_replies as usize;
            subscribed.new_comments += prefs.new_comments as usize;
            subscribed.weekly_digest += prefs.weekly_digest as usize;
        }

        Self {
            total_active_users: users.len(),
            subscribed,
            admin_notification_recipients: users
                .iter()
                .filter(|user| user.email_preferences.admin_notifications)
                .cloned()
                .collect(),
            new_post_recipients: users
                .into_iter()
                .filter(|user| user.email_preferences.new_posts)
                .collect(),
        }
    }

    pub fn into_dto(self) -> RecipientSummaryDto {
        let recipient = |user: User| RecipientDto {
            id: user.id,
            name: user.name,
            email: user.email,
        };

        RecipientSummaryDto {
            total_active_users: self.total_active_users,
            subscribed: PreferenceCountsDto {
                new_posts: self.subscribed.new_posts,
                admin_notifications: self.subscribed.admin_notifications,
                comment_replies: self.subscribed.comment_replies,
                new_comments: self.subscribed.new_comments,
                weekly_digest: self.subscribed.weekly_digest,
            },
            admin_notification_recipients: self
                .admin_notification_recipients
                .into_iter()
                .map(recipient)
                .collect(),
            new_post_recipients: self.new_post_recipients.into_iter().map(recipient).collect(),
        }
    }
}
