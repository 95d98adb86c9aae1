//! Message bodies for email and Telegram notifications.
//!
//! Telegram messages use the HTML parse mode, so every user-provided value is escaped.
//! Emails are small inline HTML documents built with `format!`.

use chrono::{DateTime, Utc};

/// Characters of a post shown in the new-post email.
pub const EMAIL_PREVIEW_CHARS: usize = 200;

/// Characters of a comment shown in Telegram comment alerts.
pub const TELEGRAM_PREVIEW_CHARS: usize = 100;

const APP_NAME: &str = "Yskandar Community";

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Cuts `text` to `max` characters, appending `...` when something was removed.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.push_str("...");
    cut
}

fn long_date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M:%S").to_string()
}

fn short_date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

pub fn post_url(app_url: &str, post_id: i32) -> String {
    format!("{}/blog/{}", app_url.trim_end_matches('/'), post_id)
}

pub fn login_alert(user_name: &str, at: DateTime<Utc>) -> String {
    format!(
        "🔐 <b>Nuevo Login Detectado</b>\n\n\
         👤 <b>Usuario:</b> {}\n\
         🕐 <b>Fecha y hora:</b> {}\n\
         🌐 <b>Aplicación:</b> {}\n\n\
         ✅ Si fuiste tú, puedes ignorar este mensaje.\n\
         ❌ Si no reconoces este acceso, cambia tu contraseña inmediatamente.",
        escape_html(user_name),
        long_date(at),
        APP_NAME
    )
}

pub fn new_post_alert(title: &str, author: &str, at: DateTime<Utc>, url: Option<&str>) -> String {
    let mut message = format!(
        "📝 <b>Nuevo Post Publicado</b>\n\n\
         📰 <b>Título:</b> {}\n\
         ✍️ <b>Autor:</b> {}\n\
         🕐 <b>Fecha:</b> {}",
        escape_html(title),
        escape_html(author),
        short_date(at)
    );
    if let Some(url) = url {
        message.push_str(&format!("\n\n🔗 <a href='{}'>Leer completo</a>", url));
    }
    message
}

pub fn comment_alert(
    post_title: &str,
    commenter: &str,
    comment: &str,
    at: DateTime<Utc>,
    url: Option<&str>,
) -> String {
    let mut message = format!(
        "💬 <b>Nuevo Comentario</b>\n\n\
         📰 <b>Post:</b> {}\n\
         👤 <b>Comentario de:</b> {}\n\
         💭 <b>Comentario:</b> \"{}\"\n\
         🕐 <b>Fecha:</b> {}",
        escape_html(post_title),
        escape_html(commenter),
        escape_html(&preview(comment, TELEGRAM_PREVIEW_CHARS)),
        short_date(at)
    );
    if let Some(url) = url {
        message.push_str(&format!("\n\n🔗 <a href='{}'>Ver post completo</a>", url));
    }
    message
}

/// Admin notice; `message` may carry Telegram HTML and is sent as-is.
pub fn admin_notice(title: &str, message: &str, at: DateTime<Utc>) -> String {
    format!(
        "📢 <b>{}</b>\n\n{}\n\n🕐 <b>Fecha:</b> {}\n🤖 <i>Enviado desde {}</i>",
        escape_html(title),
        message,
        long_date(at),
        APP_NAME
    )
}

pub fn chat_activity_alert(username: &str, message: &str, at: DateTime<Utc>) -> String {
    admin_notice(
        "Actividad en el chat",
        &format!(
            "👤 <b>{}</b> escribió en el chat tras un periodo de inactividad:\n💭 \"{}\"",
            escape_html(username),
            escape_html(&preview(message, TELEGRAM_PREVIEW_CHARS))
        ),
        at,
    )
}

fn email_layout(heading: &str, body: &str) -> String {
    format!(
        "<html><body style=\"font-family: Arial, sans-serif; color: #333;\">\
         <h2>{}</h2>{}\
         <hr><p style=\"font-size: 12px; color: #888;\">{}</p>\
         </body></html>",
        heading, body, APP_NAME
    )
}

fn paragraphs(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Subject and HTML body of the new-post email.
pub fn new_post_email(title: &str, author: &str, content: &str, url: &str) -> (String, String) {
    let body = format!(
        "<p><b>{}</b> publicó un nuevo post:</p>\
         <h3>{}</h3>\
         <p>{}</p>\
         <p><a href=\"{}\">Leer completo</a></p>",
        escape_html(author),
        escape_html(title),
        paragraphs(&preview(content, EMAIL_PREVIEW_CHARS)),
        url
    );

    (
        format!("📝 Nuevo post: {}", title),
        email_layout("Nuevo post en Yskandar", &body),
    )
}

/// Sent to the author of a comment that received a reply.
pub fn comment_reply_email(
    post_title: &str,
    replier: &str,
    reply: &str,
    url: &str,
) -> (String, String) {
    let body = format!(
        "<p><b>{}</b> respondió a tu comentario en <b>{}</b>:</p>\
         <blockquote>{}</blockquote>\
         <p><a href=\"{}\">Ver conversación</a></p>",
        escape_html(replier),
        escape_html(post_title),
        paragraphs(&preview(reply, EMAIL_PREVIEW_CHARS)),
        url
    );

    (
        format!("💬 {} respondió a tu comentario", replier),
        email_layout("Nueva respuesta a tu comentario", &body),
    )
}

/// Sent to a post author when someone comments on their post.
pub fn new_comment_email(
    post_title: &str,
    commenter: &str,
    comment: &str,
    url: &str,
) -> (String, String) {
    let body = format!(
        "<p><b>{}</b> comentó en tu post <b>{}</b>:</p>\
         <blockquote>{}</blockquote>\
         <p><a href=\"{}\">Ver comentario</a></p>",
        escape_html(commenter),
        escape_html(post_title),
        paragraphs(&preview(comment, EMAIL_PREVIEW_CHARS)),
        url
    );

    (
        format!("💬 Nuevo comentario en: {}", post_title),
        email_layout("Nuevo comentario en tu post", &body),
    )
}

pub fn broadcast_email(subject: &str, message: &str, sender: &str) -> (String, String) {
    let body = format!(
        "<p>{}</p><p style=\"color: #666;\">Enviado por {}</p>",
        paragraphs(message),
        escape_html(sender)
    );

    (format!("📢 {}", subject), email_layout(&escape_html(subject), &body))
}
