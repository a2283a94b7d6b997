//! # errs
//!
//! Compose several independent errors into one error value, and split such a
//! value back into its parts.
//!
//! ## Model
//!
//! - **Absence**: "no error" is `None`. Every function accepts and returns
//!   `Option<Error>`, so absence flows through without allocation.
//! - **Leaf**: a single message, created with [`new`].
//! - **Pair**: exactly two errors, created with [`pair`].
//! - **Chain**: three or more errors, created with [`chain`].
//! - **Other**: a foreign `std::error::Error`, wrapped with [`Error::wrap`].
//!
//! Composites render as their components joined with `"; "`.
//!
//! ## Usage
//!
//! ```rust
//! use errs::{chain, new, unpack, ErrorKind};
//!
//! let err = errs::chain!(Some(new("disk full")), None, Some(new("quota exceeded")))
//!     .expect("two errors were given");
//! assert_eq!(err.to_string(), "disk full; quota exceeded");
//! assert_eq!(err.kind(), ErrorKind::Pair);
//!
//! let (head, rest) = unpack(Some(err));
//! assert_eq!(head.map(|e| e.to_string()).as_deref(), Some("disk full"));
//! assert_eq!(rest.map(|e| e.to_string()).as_deref(), Some("quota exceeded"));
//!
//! assert!(chain(Vec::<errs::Error>::new()).is_none());
//! ```

mod compose;
mod error;
mod kind;

pub use compose::{chain, eat, eat_result, new, pair, unpack};
pub use error::{Error, Leaves, SEPARATOR};
pub use kind::ErrorKind;

/// Result type alias using the composable Error
pub type Result<T> = std::result::Result<T, Error>;

/// Chain a fixed list of `Option<Error>` expressions.
///
/// `chain!(a, b, c)` is [`chain`]`([a, b, c])`; `chain!()` is `None`.
#[macro_export]
macro_rules! chain {
    () => {
        ::core::option::Option::<$crate::Error>::None
    };
    ($($err:expr),+ $(,)?) => {
        $crate::chain([$({
            let err: ::core::option::Option<$crate::Error> = $err;
            err
        }),+])
    };
}
