use std::{
    fmt::{self, Display},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

/// A mailbox taking part in a mail transaction, either as the sender
/// (reverse-path) or as one of the recipients (forward-path).
///
/// Mailboxes arrive here already parsed by the session layer; this type only
/// carries the two halves around. Cloning is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mailbox {
    local_part: Arc<str>,
    domain: Arc<str>,
}

impl Mailbox {
    pub fn new(local_part: impl Into<Arc<str>>, domain: impl Into<Arc<str>>) -> Self {
        Self {
            local_part: local_part.into(),
            domain: domain.into(),
        }
    }

    /// The null reverse-path, `MAIL FROM:<>`, used for bounces.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.local_part.is_empty() && self.domain.is_empty()
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            Ok(())
        } else {
            write!(f, "{}@{}", self.local_part, self.domain)
        }
    }
}
