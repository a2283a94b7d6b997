//! Shapes an error value can take

use strum_macros::{Display, IntoStaticStr};

/// The shape of an [`Error`](crate::Error).
///
/// Absence is not a kind: "no error" is `None` and never reaches this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum ErrorKind {
    /// A single message with no sub-errors
    Leaf,

    /// Exactly two errors combined with [`pair`](crate::pair)
    Pair,

    /// Three or more errors combined with [`chain`](crate::chain)
    Chain,

    /// A foreign error wrapped with [`Error::wrap`](crate::Error::wrap),
    /// handled as an opaque leaf
    Other,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if errors of this kind hold other errors
    pub fn is_composite(&self) -> bool {
        matches!(self, ErrorKind::Pair | ErrorKind::Chain)
    }
}
