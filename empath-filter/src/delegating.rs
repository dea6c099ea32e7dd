use std::{fmt, net::SocketAddr};

use async_trait::async_trait;
use empath_common::Mailbox;

use crate::{MailboxFilter, Result, Verdict};

type SenderPredicate = dyn Fn(&SocketAddr, &Mailbox, usize) -> bool + Send + Sync;
type RecipientPredicate = dyn Fn(&Mailbox, &Mailbox) -> bool + Send + Sync;

/// A filter backed by plain predicates.
///
/// A predicate returning `true` accepts the mailbox, `false` refuses it
/// permanently. A question without a predicate is always accepted.
///
/// ```rust
/// use empath_filter::DelegatingFilter;
///
/// let local_only = DelegatingFilter::recipients(|to, _from| to.domain() == "example.org");
/// ```
pub struct DelegatingFilter {
    senders: Option<Box<SenderPredicate>>,
    recipients: Option<Box<RecipientPredicate>>,
}

impl DelegatingFilter {
    /// Filter both senders and recipients.
    pub fn new<S, R>(senders: S, recipients: R) -> Self
    where
        S: Fn(&SocketAddr, &Mailbox, usize) -> bool + Send + Sync + 'static,
        R: Fn(&Mailbox, &Mailbox) -> bool + Send + Sync + 'static,
    {
        Self {
            senders: Some(Box::new(senders)),
            recipients: Some(Box::new(recipients)),
        }
    }

    /// Filter senders only, accepting every recipient.
    pub fn senders<S>(senders: S) -> Self
    where
        S: Fn(&SocketAddr, &Mailbox, usize) -> bool + Send + Sync + 'static,
    {
        Self {
            senders: Some(Box::new(senders)),
            recipients: None,
        }
    }

    /// Filter recipients only, accepting every sender.
    pub fn recipients<R>(recipients: R) -> Self
    where
        R: Fn(&Mailbox, &Mailbox) -> bool + Send + Sync + 'static,
    {
        Self {
            senders: None,
            recipients: Some(Box::new(recipients)),
        }
    }
}

const fn verdict(accepted: bool) -> Verdict {
    if accepted {
        Verdict::Yes
    } else {
        Verdict::NoPermanently
    }
}

impl fmt::Debug for DelegatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatingFilter")
            .field("senders", &self.senders.is_some())
            .field("recipients", &self.recipients.is_some())
            .finish()
    }
}

#[async_trait]
impl MailboxFilter for DelegatingFilter {
    async fn can_accept_from(
        &self,
        peer: &SocketAddr,
        from: &Mailbox,
        size: usize,
    ) -> Result<Verdict> {
        Ok(self
            .senders
            .as_ref()
            .map_or(Verdict::Yes, |accept| verdict(accept(peer, from, size))))
    }

    async fn can_deliver_to(&self, to: &Mailbox, from: &Mailbox) -> Result<Verdict> {
        Ok(self
            .recipients
            .as_ref()
            .map_or(Verdict::Yes, |accept| verdict(accept(to, from))))
    }
}
