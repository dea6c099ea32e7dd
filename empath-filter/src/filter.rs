use std::net::SocketAddr;

use async_trait::async_trait;
use empath_common::Mailbox;

use crate::{Result, Verdict};

/// Estimated message size to pass when the client did not declare one.
pub const SIZE_UNKNOWN: usize = 0;

/// Decides whether mailboxes may take part in a mail transaction.
///
/// Filters are shared between every session on a listener, so
/// implementations must be safe to call concurrently and keep any state they
/// need behind their own synchronisation.
///
/// # Errors
///
/// Returning an error means the filter could not decide. Callers must not
/// treat that as acceptance.
#[async_trait]
pub trait MailboxFilter: Send + Sync {
    /// Whether a client connected from `peer` may send mail from `from`.
    ///
    /// # Arguments
    ///
    /// * `peer` - Remote address of the session
    /// * `from` - The reverse-path given in `MAIL FROM`
    /// * `size` - Estimated message size from the `SIZE` parameter, or
    ///   [`SIZE_UNKNOWN`]
    async fn can_accept_from(
        &self,
        peer: &SocketAddr,
        from: &Mailbox,
        size: usize,
    ) -> Result<Verdict>;

    /// Whether mail from `from` may be delivered to `to`.
    ///
    /// # Arguments
    ///
    /// * `to` - The forward-path given in `RCPT TO`
    /// * `from` - The reverse-path of the current transaction
    async fn can_deliver_to(&self, to: &Mailbox, from: &Mailbox) -> Result<Verdict>;
}

/// Accepts every sender and every recipient.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

#[async_trait]
impl MailboxFilter for AcceptAll {
    async fn can_accept_from(
        &self,
        _peer: &SocketAddr,
        _from: &Mailbox,
        _size: usize,
    ) -> Result<Verdict> {
        Ok(Verdict::Yes)
    }

    async fn can_deliver_to(&self, _to: &Mailbox, _from: &Mailbox) -> Result<Verdict> {
        Ok(Verdict::Yes)
    }
}
