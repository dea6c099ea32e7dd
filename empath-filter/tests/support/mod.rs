//! Instrumented filters for exercising `CompositeFilter`.
//!
//! Every fake records the arguments it was called with, so tests can assert
//! that each filter was consulted exactly once and saw the caller's inputs.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use empath_common::Mailbox;
use empath_filter::{FilterError, MailboxFilter, Result, Verdict};
use tokio::sync::Barrier;
use tracing::{
    Event, Subscriber,
    span::{Attributes, Id},
};
use tracing_subscriber::{Layer, layer::Context};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    AcceptFrom {
        peer: SocketAddr,
        from: Mailbox,
        size: usize,
    },
    DeliverTo {
        to: Mailbox,
        from: Mailbox,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn record(&self, call: Call) {
        self.calls.lock().expect("Poisoned Lock").push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("Poisoned Lock").clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().expect("Poisoned Lock").len()
    }
}

/// Answers every question with the same verdict.
#[derive(Debug)]
pub struct FixedFilter {
    verdict: Verdict,
    pub recorder: Recorder,
}

impl FixedFilter {
    pub fn new(verdict: Verdict) -> Arc<Self> {
        Arc::new(Self {
            verdict,
            recorder: Recorder::default(),
        })
    }
}

#[async_trait]
impl MailboxFilter for FixedFilter {
    async fn can_accept_from(
        &self,
        peer: &SocketAddr,
        from: &Mailbox,
        size: usize,
    ) -> Result<Verdict> {
        self.recorder.record(Call::AcceptFrom {
            peer: *peer,
            from: from.clone(),
            size,
        });
        Ok(self.verdict)
    }

    async fn can_deliver_to(&self, to: &Mailbox, from: &Mailbox) -> Result<Verdict> {
        self.recorder.record(Call::DeliverTo {
            to: to.clone(),
            from: from.clone(),
        });
        Ok(self.verdict)
    }
}

/// Fails every question, as a filter whose backing service is down would.
#[derive(Debug)]
pub struct FailingFilter {
    reason: &'static str,
    pub recorder: Recorder,
}

impl FailingFilter {
    pub fn new(reason: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reason,
            recorder: Recorder::default(),
        })
    }
}

#[async_trait]
impl MailboxFilter for FailingFilter {
    async fn can_accept_from(
        &self,
        peer: &SocketAddr,
        from: &Mailbox,
        size: usize,
    ) -> Result<Verdict> {
        self.recorder.record(Call::AcceptFrom {
            peer: *peer,
            from: from.clone(),
            size,
        });
        Err(FilterError::Unavailable(self.reason.to_string()))
    }

    async fn can_deliver_to(&self, to: &Mailbox, from: &Mailbox) -> Result<Verdict> {
        self.recorder.record(Call::DeliverTo {
            to: to.clone(),
            from: from.clone(),
        });
        Err(FilterError::Unavailable(self.reason.to_string()))
    }
}

/// Waits on a shared barrier before answering.
///
/// With `n` of these behind an `n`-party barrier, a call only completes if
/// all of them are in flight at once.
#[derive(Debug)]
pub struct BarrierFilter {
    barrier: Arc<Barrier>,
    verdict: Verdict,
}

impl BarrierFilter {
    pub fn new(barrier: Arc<Barrier>, verdict: Verdict) -> Arc<Self> {
        Arc::new(Self { barrier, verdict })
    }
}

#[async_trait]
impl MailboxFilter for BarrierFilter {
    async fn can_accept_from(&self, _: &SocketAddr, _: &Mailbox, _: usize) -> Result<Verdict> {
        self.barrier.wait().await;
        Ok(self.verdict)
    }

    async fn can_deliver_to(&self, _: &Mailbox, _: &Mailbox) -> Result<Verdict> {
        self.barrier.wait().await;
        Ok(self.verdict)
    }
}

struct DropGuard(Arc<AtomicUsize>);

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Never answers. Counts how many of its evaluations were dropped unfinished.
#[derive(Debug, Default)]
pub struct PendingFilter {
    pub started: AtomicUsize,
    pub dropped: Arc<AtomicUsize>,
}

impl PendingFilter {
    async fn hang(&self) -> Result<Verdict> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let _guard = DropGuard(Arc::clone(&self.dropped));
        std::future::pending::<()>().await;
        Ok(Verdict::Yes)
    }
}

#[async_trait]
impl MailboxFilter for PendingFilter {
    async fn can_accept_from(&self, _: &SocketAddr, _: &Mailbox, _: usize) -> Result<Verdict> {
        self.hang().await
    }

    async fn can_deliver_to(&self, _: &Mailbox, _: &Mailbox) -> Result<Verdict> {
        self.hang().await
    }
}

/// A span opened while a [`Captured`] layer was installed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedSpan {
    pub name: &'static str,
    pub fields: Vec<&'static str>,
}

/// Collects every span and event dispatched to it.
#[derive(Clone, Debug, Default)]
pub struct Captured {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<String>>>,
}

impl Captured {
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().expect("Poisoned Lock").clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("Poisoned Lock").clone()
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_new_span(&self, attrs: &Attributes<'_>, _: &Id, _: Context<'_, S>) {
        let metadata = attrs.metadata();
        self.spans
            .lock()
            .expect("Poisoned Lock")
            .push(CapturedSpan {
                name: metadata.name(),
                fields: metadata.fields().iter().map(|field| field.name()).collect(),
            });
    }

    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        self.events
            .lock()
            .expect("Poisoned Lock")
            .push(format!("{} {}", event.metadata().target(), event.metadata().name()));
    }
}

pub fn peer() -> SocketAddr {
    "192.0.2.10:52344".parse().expect("valid socket address")
}

pub fn sender() -> Mailbox {
    Mailbox::new("alice", "example.com")
}

pub fn recipient() -> Mailbox {
    Mailbox::new("bob", "example.org")
}
