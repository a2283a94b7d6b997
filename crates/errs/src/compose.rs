//! Combinators that merge errors into one value and split them apart.
//!
//! Every function here is total: `None` ("no error") is accepted anywhere an
//! error is and flows through unchanged.

use crate::error::{Error, Repr};
use std::fmt;

/// Create a leaf error from anything printable.
pub fn new(message: impl fmt::Display) -> Error {
    Error::new(message)
}

/// Discard `value` and forward `err` unchanged.
///
/// Keeps only the error half of a `(value, error)` result without binding the
/// value to a name. See [`eat_result`] for the `Result` form.
pub fn eat<T>(_value: T, err: Option<Error>) -> Option<Error> {
    err
}

/// Discard the success value of a `Result`, keeping only its error.
pub fn eat_result<T>(result: Result<T, Error>) -> Option<Error> {
    result.err()
}

/// Combine two errors.
///
/// If either side is absent the other is returned as-is; only two present
/// errors produce a [`Pair`](crate::ErrorKind::Pair).
pub fn pair(first: Option<Error>, second: Option<Error>) -> Option<Error> {
    match (first, second) {
        (Some(first), Some(second)) => Some(Error::pair(first, second)),
        (first, None) => first,
        (None, second) => second,
    }
}

/// Combine any number of errors, skipping absent ones and keeping order.
///
/// Nothing left gives `None`, one error is returned unwrapped, two errors
/// become a [`pair`], three or more a [`Chain`](crate::ErrorKind::Chain).
/// Items may be `Error` or `Option<Error>`.
pub fn chain<I>(errs: I) -> Option<Error>
where
    I: IntoIterator,
    I::Item: Into<Option<Error>>,
{
    let mut total = 0usize;
    let mut present: Vec<Error> = errs
        .into_iter()
        .inspect(|_| total += 1)
        .filter_map(Into::into)
        .collect();
    let kept = present.len();

    let err = match kept {
        0 => None,
        1 => present.pop(),
        2 => {
            let second = present.pop();
            let first = present.pop();
            pair(first, second)
        }
        _ => Some(Error::chain(present)),
    };

    let shape = err.as_ref().map_or("None", |err| err.kind().as_str());
    tracing::trace!(total, kept, shape = %shape, "chaining errors");
    err
}

/// Split an error into its head and the rest.
///
/// - `None` gives `(None, None)`
/// - a leaf or wrapped error gives `(err, None)`
/// - a pair gives its two components
/// - a chain gives its first element and the remaining elements, which are
///   a single error when one is left and a shorter chain otherwise
///
/// The head is never `None` while the rest is present.
pub fn unpack(err: Option<Error>) -> (Option<Error>, Option<Error>) {
    let Some(err) = err else {
        return (None, None);
    };

    tracing::trace!(kind = %err.kind(), "unpacking error");

    match err.repr {
        Repr::Pair(pair) => {
            let [first, second] = *pair;
            (Some(first), Some(second))
        }
        Repr::Chain(errs) => split_chain(errs),
        repr @ (Repr::Leaf(_) | Repr::Other(_)) => (Some(Error { repr }), None),
    }
}

fn split_chain(errs: Vec<Error>) -> (Option<Error>, Option<Error>) {
    let mut errs = errs.into_iter();
    let Some(head) = errs.next() else {
        return (None, None);
    };
    let rest = match errs.len() {
        0 => None,
        1 => errs.next(),
        _ => Some(Error::chain(errs.collect())),
    };
    (Some(head), rest)
}
