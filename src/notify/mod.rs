//! Alert dispatch on derived signals.

pub mod email;

pub use email::{compose_alert, send_alert, EmailAlert, NotifyError, SmtpSettings};
