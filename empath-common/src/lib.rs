//! Types shared between the empath mailbox filters and the session layer that
//! drives them.

pub mod config;
pub mod logging;
pub mod mailbox;
pub mod status;

pub use mailbox::Mailbox;
pub use status::Status;
