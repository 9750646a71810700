//! Email alert composition and SMTP dispatch.
//!
//! All transport parameters travel with the request. Nothing here reads
//! credentials from process-wide state.

use crate::models::{IndicatorRow, Signal};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("malformed message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("no signals to report")]
    NothingToReport,
}

/// Caller-supplied SMTP transport settings, valid for one dispatch.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// One alert: who it goes to and which signal rows it reports.
#[derive(Debug, Clone)]
pub struct EmailAlert {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Compose an alert from the signal table. The most recent event leads;
/// the full table follows, one line per event.
pub fn compose_alert(
    from: &str,
    to: &str,
    signals: &[IndicatorRow],
) -> Result<EmailAlert, NotifyError> {
    let latest = signals.last().ok_or(NotifyError::NothingToReport)?;

    let direction = match latest.signal {
        Signal::Buy => "BUY",
        Signal::Sell => "SELL",
        Signal::None => return Err(NotifyError::NothingToReport),
    };

    let mut body = format!(
        "Latest signal: {direction} on {} at close {:.4}\n\nAll crossover events:\n",
        latest.date, latest.close
    );
    for row in signals {
        let tag = match row.signal {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::None => continue,
        };
        body.push_str(&format!(
            "{}  close {:.4}  short MA {:.4}  long MA {:.4}  {}\n",
            row.date,
            row.close,
            row.short_ma.unwrap_or(f64::NAN),
            row.long_ma.unwrap_or(f64::NAN),
            tag
        ));
    }

    Ok(EmailAlert {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!("Trading signal: {direction} ({})", latest.date),
        body,
    })
}

/// Send an alert over SMTP with STARTTLS.
pub async fn send_alert(alert: &EmailAlert, smtp: &SmtpSettings) -> Result<(), NotifyError> {
    let message = Message::builder()
        .from(alert.from.parse()?)
        .to(alert.to.parse()?)
        .subject(alert.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(alert.body.clone())?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.server)?
        .port(smtp.port)
        .credentials(Credentials::new(
            smtp.username.clone(),
            smtp.password.clone(),
        ))
        .build();

    transport.send(message).await?;
    Ok(())
}
