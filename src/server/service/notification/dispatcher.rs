//! Best-effort delivery of notifications.
//!
//! Request handlers call the fire-and-forget methods (`login`, `post_created`, ...), which
//! spawn a task and return immediately. Each task calls the matching `deliver_*` method;
//! those are public so the recipient selection can be exercised directly. Delivery
//! failures are logged and never reach the caller.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    integration::{mailer::Mailer, telegram::TelegramClient},
    model::{
        comment::Comment,
        post::Post,
        user::{TelegramPreferences, User},
    },
    service::notification::builder,
};

/// Recipients per email; all of them go in Bcc.
pub const EMAIL_BATCH_SIZE: usize = 50;

/// The user's chat id when Telegram is enabled and `wants` accepts their preferences.
fn telegram_chat(user: &User, wants: impl Fn(&TelegramPreferences) -> bool) -> Option<&str> {
    let prefs = &user.telegram_preferences;
    if prefs.enabled && wants(prefs) {
        user.telegram_id.as_deref()
    } else {
        None
    }
}

/// What a delivery run managed to send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    pub emails: usize,
    pub telegrams: usize,
}

#[derive(Clone)]
pub struct Notifier {
    db: DatabaseConnection,
    mailer: Mailer,
    telegram: TelegramClient,
    app_url: String,
}

impl Notifier {
    pub fn new(
        db: DatabaseConnection,
        mailer: Mailer,
        telegram: TelegramClient,
        app_url: String,
    ) -> Self {
        Self {
            db,
            mailer,
            telegram,
            app_url,
        }
    }

    pub fn mailer(&self) -> &Mailer {
        &self.mailer
    }

    pub fn telegram(&self) -> &TelegramClient {
        &self.telegram
    }

    pub fn login(&self, user: User) {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier.deliver_login(&user).await;
        });
    }

    pub fn post_created(&self, post: Post) {
        let notifier = self.clone();
        tokio::spawn(async move {
            let delivery = notifier.deliver_post_created(&post).await;
            tracing::info!(
                "New post {} announced by {} emails and {} Telegram messages",
                post.id,
                delivery.emails,
                delivery.telegrams
            );
        });
    }

    pub fn comment_created(&self, post: Post, comment: Comment, parent: Option<Comment>) {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier
                .deliver_comment_created(&post, &comment, parent.as_ref())
                .await;
        });
    }

    pub fn chat_activity(&self, sender_id: Option<i32>, username: String, message: String) {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier
                .deliver_chat_activity(sender_id, &username, &message)
                .await;
        });
    }

    /// Telegram login alert, if the user linked a chat and opted in.
    pub async fn deliver_login(&self, user: &User) -> Delivery {
        let Some(chat_id) = telegram_chat(user, |prefs| prefs.login_notifications) else {
            return Delivery::default();
        };

        let text = builder::login_alert(&user.name, Utc::now());
        Delivery {
            emails: 0,
            telegrams: self.send_telegram(chat_id, &text).await as usize,
        }
    }

    /// Emails and Telegram alerts to every active subscriber except the author.
    pub async fn deliver_post_created(&self, post: &Post) -> Delivery {
        let users = match UserRepository::new(&self.db).get_active().await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!("Failed to load new post recipients: {}", e);
                return Delivery::default();
            }
        };
        let url = builder::post_url(&self.app_url, post.id);

        let emails: Vec<String> = users
            .iter()
            .filter(|user| user.id != post.author_id && user.email_preferences.new_posts)
            .map(|user| user.email.clone())
            .collect();
        let (subject, html) =
            builder::new_post_email(&post.title, &post.author_name, &post.content, &url);
        let emails = self.send_email_batches(&emails, &subject, &html).await;

        let text =
            builder::new_post_alert(&post.title, &post.author_name, Utc::now(), Some(&url));
        let mut telegrams = 0;
        for user in users.iter().filter(|user| user.id != post.author_id) {
            if let Some(chat_id) = telegram_chat(user, |prefs| prefs.new_posts) {
                telegrams += self.send_telegram(chat_id, &text).await as usize;
            }
        }

        Delivery { emails, telegrams }
    }

    /// Tells the parent comment's author about a reply, and the post author about a new
    /// comment. Nobody is notified about their own comment and nobody is notified twice.
    pub async fn deliver_comment_created(
        &self,
        post: &Post,
        comment: &Comment,
        parent: Option<&Comment>,
    ) -> Delivery {
        let repo = UserRepository::new(&self.db);
        let url = builder::post_url(&self.app_url, post.id);
        let mut delivery = Delivery::default();
        let mut notified = Vec::new();

        if let Some(parent) = parent.filter(|parent| parent.author_id != comment.author_id) {
            match repo.find_by_id(parent.author_id).await {
                Ok(Some(author)) if author.is_active => {
                    if author.email_preferences.comment_replies {
                        let (subject, html) = builder::comment_reply_email(
                            &post.title,
                            &comment.author_name,
                            &comment.content,
                            &url,
                        );
                        delivery.emails += self
                            .send_email_batches(&[author.email.clone()], &subject, &html)
                            .await;
                    }
                    delivery.telegrams +=
                        self.telegram_comment(&author, post, comment, &url).await;
                    notified.push(author.id);
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Failed to load reply recipient: {}", e),
            }
        }

        if post.author_id != comment.author_id && !notified.contains(&post.author_id) {
            match repo.find_by_id(post.author_id).await {
                Ok(Some(author)) if author.is_active => {
                    if author.email_preferences.new_comments {
                        let (subject, html) = builder::new_comment_email(
                            &post.title,
                            &comment.author_name,
                            &comment.content,
                            &url,
                        );
                        delivery.emails += self
                            .send_email_batches(&[author.email.clone()], &subject, &html)
                            .await;
                    }
                    delivery.telegrams +=
                        self.telegram_comment(&author, post, comment, &url).await;
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Failed to load post author: {}", e),
            }
        }

        delivery
    }

    /// Alerts admins (other than the sender) that the chat woke up.
    pub async fn deliver_chat_activity(
        &self,
        sender_id: Option<i32>,
        username: &str,
        message: &str,
    ) -> Delivery {
        let admins = match UserRepository::new(&self.db).get_admins().await {
            Ok(admins) => admins,
            Err(e) => {
                tracing::error!("Failed to load admins for chat alert: {}", e);
                return Delivery::default();
            }
        };

        let text = builder::chat_activity_alert(username, message, Utc::now());
        let mut telegrams = 0;
        for admin in admins.iter().filter(|admin| Some(admin.id) != sender_id) {
            if let Some(chat_id) = telegram_chat(admin, |prefs| prefs.admin_notifications) {
                telegrams += self.send_telegram(chat_id, &text).await as usize;
            }
        }

        Delivery {
            emails: 0,
            telegrams,
        }
    }

    /// Sends the same email in batches of `EMAIL_BATCH_SIZE`.
    ///
    /// # Returns
    /// - `usize` - Recipients in batches the relay accepted
    pub async fn send_email_batches(
        &self,
        recipients: &[String],
        subject: &str,
        html: &str,
    ) -> usize {
        if recipients.is_empty() {
            return 0;
        }
        if !self.mailer.is_enabled() {
            tracing::warn!(
                "Email not configured, skipping \"{}\" for {} recipients",
                subject,
                recipients.len()
            );
            return 0;
        }

        let mut sent = 0;
        for batch in recipients.chunks(EMAIL_BATCH_SIZE) {
            match self.mailer.send(batch, subject, html).await {
                Ok(()) => sent += batch.len(),
                Err(e) => tracing::warn!("Email batch of {} failed: {}", batch.len(), e),
            }
        }
        sent
    }

    async fn telegram_comment(
        &self,
        user: &User,
        post: &Post,
        comment: &Comment,
        url: &str,
    ) -> usize {
        let Some(chat_id) = telegram_chat(user, |prefs| prefs.comment_replies) else {
            return 0;
        };
        let text = builder::comment_alert(
            &post.title,
            &comment.author_name,
            &comment.content,
            Utc::now(),
            Some(url),
        );
        self.send_telegram(chat_id, &text).await as usize
    }

    /// Returns whether Telegram accepted the message.
    pub async fn send_telegram(&self, chat_id: &str, text: &str) -> bool {
        if !self.telegram.is_enabled() {
            return false;
        }
        match self.telegram.send_message(chat_id, text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Telegram message to {} failed: {}", chat_id, e);
                false
            }
        }
    }
}
