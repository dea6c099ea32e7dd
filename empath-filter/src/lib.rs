//! Mailbox acceptance filters for the SMTP session.
//!
//! A session asks two questions during a transaction: may this client use
//! the given sender (`MAIL FROM`), and may mail from that sender be delivered
//! to a given recipient (`RCPT TO`). Each question is answered by a
//! [`MailboxFilter`] with a [`Verdict`].
//!
//! Individual policies (allow-lists, rate limits, reputation lookups) are
//! written as separate filters and combined with a [`CompositeFilter`], which
//! consults all of them concurrently and answers with the most restrictive
//! verdict. Because the composite is itself a [`MailboxFilter`], the session
//! never needs to know how many policies sit behind it.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use empath_common::Mailbox;
//! use empath_filter::{AcceptAll, CompositeFilter, DelegatingFilter, MailboxFilter, Verdict};
//!
//! # async fn example() -> empath_filter::Result<()> {
//! let no_bounces: Arc<dyn MailboxFilter> =
//!     Arc::new(DelegatingFilter::senders(|_peer, from, _size| !from.is_null()));
//! let filter = CompositeFilter::new(vec![no_bounces, Arc::new(AcceptAll)]);
//!
//! let peer = "192.0.2.1:25".parse().expect("valid address");
//! let verdict = filter.can_accept_from(&peer, &Mailbox::null(), 0).await?;
//! assert_eq!(verdict, Verdict::NoPermanently);
//! # Ok(())
//! # }
//! ```

mod composite;
mod delegating;
mod error;
mod filter;
mod verdict;

pub use composite::CompositeFilter;
pub use delegating::DelegatingFilter;
pub use error::{FilterError, Result};
pub use filter::{AcceptAll, MailboxFilter, SIZE_UNKNOWN};
pub use verdict::Verdict;
