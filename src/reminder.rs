//! Streak reminder letters for the unattended notifier.

use std::error::Error;

use lettre::{message::header::ContentType, Message, SmtpTransport, Transport};
use log::{error, info};

use crate::models::dashboard_model::StreakInfo;
use crate::models::{Config, Lang, WatchedUser};

/// A trait, necessary for every entity that will build and send reminder
/// letters.
pub trait ReminderSender {
    fn send_reminders(self, config: &Config, endangered: Vec<(WatchedUser, StreakInfo)>);
}

/// Allows SmtpTransport to form and send reminders via its native send method.
impl ReminderSender for SmtpTransport {
    fn send_reminders(self, config: &Config, endangered: Vec<(WatchedUser, StreakInfo)>) {
        for (user, streak) in endangered.iter() {
            let email = match generate_reminder_email(config, user, streak) {
                Ok(email) => email,
                Err(e) => {
                    error!("Could not build reminder for {}: {}", user.name, e);
                    continue;
                }
            };
            match self.send(&email) {
                Ok(code) => info!("Sent reminder to {} with response {:?}", user.name, code),
                Err(e) => error!("Could not send reminder to {}: {}", user.name, e),
            }
        }
    }
}

pub fn generate_reminder_email(
    config: &Config,
    user: &WatchedUser,
    streak: &StreakInfo,
) -> Result<Message, Box<dyn Error>> {
    let (subject, body) = match user.language {
        Lang::Uz => (
            "Seriyangiz uzilish arafasida!",
            format!(
                "Hurmatli {}!<br><br> Sizning <b>{}</b> kunlik seriyangiz xavf ostida: uni saqlab qolish uchun <b>{}</b> soat qoldi. Bugun kamida bitta mashq yechib qo'ying.<br><br> Ushbu xat avtomatik yuborildi, unga javob berish shart emas.",
                user.name, streak.streak_count, streak.hours_left
            ),
        ),
        Lang::Ru => (
            "Ваша серия под угрозой!",
            format!(
                "Уважаемый(ая) {}!<br><br> Ваша серия из <b>{}</b> дней под угрозой: осталось <b>{}</b> часов, чтобы её сохранить. Решите хотя бы одно задание сегодня.<br><br> Данное письмо было сгенерировано автоматически, направление ответа не подразумевается.",
                user.name, streak.streak_count, streak.hours_left
            ),
        ),
    };

    let email = Message::builder()
        .from(
            format!(
                "{} <{}>",
                config.email_sender_fullname, config.email_sender_username
            )
            .parse()?,
        )
        .to(format!("{} <{}>", user.name, user.email).parse()?)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(body)?;

    Ok(email)
}
