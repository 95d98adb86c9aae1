//! Telegram adoption statistics and broadcast outcomes.

use crate::{
    model::telegram::{TelegramBroadcastResultDto, TelegramStatsDto},
    server::model::user::User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramBroadcastOutcome {
    pub sent_count: usize,
    pub failed_count: usize,
    pub total_users: usize,
}

impl TelegramBroadcastOutcome {
    pub fn into_dto(self) -> TelegramBroadcastResultDto {
        TelegramBroadcastResultDto {
            success: self.failed_count == 0,
            sent_count: self.sent_count,
            failed_count: self.failed_count,
            total_users: self.total_users,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelegramStats {
    pub total_users: u64,
    pub users_with_telegram: u64,
    pub telegram_enabled: u64,
    pub admin_notifications_enabled: u64,
}

impl TelegramStats {
    pub fn from_users(users: &[User]) -> Self {
        let mut stats = Self {
            total_users: users.len() as u64,
            ..Default::default()
        };

        for user in users.iter().filter(|user| user.telegram_id.is_some()) {
            let prefs = user.telegram_preferences;
            stats.users_with_telegram += 1;
            if prefs.enabled {
                stats.telegram_enabled += 1;
                if prefs.admin_notifications {
                    stats.admin_notifications_enabled += 1;
                }
            }
        }

        stats
    }

    pub fn into_dto(self) -> TelegramStatsDto {
        TelegramStatsDto {
            adoption_rate: percent(self.users_with_telegram, self.total_users),
            enabled_rate: percent(self.telegram_enabled, self.users_with_telegram),
            total_users: self.total_users,
            users_with_telegram: self.users_with_telegram,
            telegram_enabled: self.telegram_enabled,
            admin_notifications_enabled: self.admin_notifications_enabled,
        }
    }
}

/// `part / whole` as a percentage rounded to one decimal, 0 for an empty whole.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / whole as f64).round() / 10.0
}
