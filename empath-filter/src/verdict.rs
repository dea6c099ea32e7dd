use core::fmt::{self, Display, Formatter};

use empath_common::Status;
use serde::{Deserialize, Serialize};

/// Outcome of a mailbox acceptance check.
///
/// Variants are ordered from most permissive to most restrictive, and the
/// discriminants are the ranks that ordering is derived from. Combining
/// several verdicts always keeps the greatest one.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Verdict {
    /// The mailbox is accepted.
    #[default]
    Yes = 0,
    /// The mailbox is refused for now; the client may retry later.
    NoTemporarily = 1,
    /// The mailbox is refused and retrying will not help.
    NoPermanently = 2,
}

impl Verdict {
    /// Rank of this verdict; higher is more restrictive.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub const fn is_temporary(self) -> bool {
        matches!(self, Self::NoTemporarily)
    }

    pub const fn is_permanent(self) -> bool {
        matches!(self, Self::NoPermanently)
    }

    /// Reduce a collection of verdicts to the most restrictive one.
    ///
    /// An empty collection has nothing to object, so it reduces to
    /// [`Verdict::Yes`].
    pub fn most_restrictive(verdicts: impl IntoIterator<Item = Self>) -> Self {
        verdicts.into_iter().max().unwrap_or_default()
    }

    /// The reply code a session answers with for this verdict.
    pub const fn status(self) -> Status {
        match self {
            Self::Yes => Status::Ok,
            Self::NoTemporarily => Status::ActionUnavailable,
            Self::NoPermanently => Status::Error,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "Yes",
            Self::NoTemporarily => "NoTemporarily",
            Self::NoPermanently => "NoPermanently",
        })
    }
}
