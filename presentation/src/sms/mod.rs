//! SMS channel: keyword parsing, the webhook handler and TwiML replies.

mod handler;
pub mod keyword;
pub mod twiml;

pub use handler::{SmsForm, SmsSessions, webhook};
pub use keyword::SmsCommand;
