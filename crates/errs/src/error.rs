//! The composable Error type.

use crate::ErrorKind;
use std::fmt;
use std::sync::Arc;

/// Separator placed between component descriptions of a composite error.
pub const SEPARATOR: &str = "; ";

/// An error value: a leaf message, a composite of several errors, or a
/// wrapped foreign error.
///
/// "No error" is never an `Error`; it is `None` in an `Option<Error>`.
/// Composites are only built by [`pair`](crate::pair) and
/// [`chain`](crate::chain), so their components are always present and a
/// chain always holds at least two of them.
#[derive(Clone)]
pub struct Error {
    pub(crate) repr: Repr,
}

#[derive(Clone)]
pub(crate) enum Repr {
    Leaf(String),
    Pair(Box<[Error; 2]>),
    Chain(Vec<Error>),
    Other(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};

impl Error {
    /// Create a leaf error from anything printable.
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            repr: Repr::Leaf(message.to_string()),
        }
    }

    /// Wrap a foreign error. It renders as itself and is never split by
    /// [`unpack`](crate::unpack).
    pub fn wrap<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            repr: Repr::Other(Arc::new(err)),
        }
    }

    /// Wrap an already boxed foreign error.
    pub fn wrap_boxed(err: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        Self {
            repr: Repr::Other(Arc::from(err)),
        }
    }

    pub(crate) fn pair(first: Error, second: Error) -> Self {
        Self {
            repr: Repr::Pair(Box::new([first, second])),
        }
    }

    pub(crate) fn chain(errs: Vec<Error>) -> Self {
        debug_assert!(errs.len() >= 2, "a chain holds at least two errors");
        Self {
            repr: Repr::Chain(errs),
        }
    }

    /// Get the shape of this error.
    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            Repr::Leaf(_) => ErrorKind::Leaf,
            Repr::Pair(_) => ErrorKind::Pair,
            Repr::Chain(_) => ErrorKind::Chain,
            Repr::Other(_) => ErrorKind::Other,
        }
    }

    /// Get the message of a leaf error
    pub fn message(&self) -> Option<&str> {
        match &self.repr {
            Repr::Leaf(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Direct components of a composite, in order. Empty for leaves and
    /// wrapped errors.
    pub fn components(&self) -> &[Error] {
        match &self.repr {
            Repr::Pair(pair) => &pair[..],
            Repr::Chain(errs) => errs,
            Repr::Leaf(_) | Repr::Other(_) => &[],
        }
    }

    /// Iterate the non-composite errors depth-first, in rendering order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Number of non-composite errors held by this error.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

/// Iterator returned by [`Error::leaves`].
pub struct Leaves<'a> {
    stack: Vec<&'a Error>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(err) = self.stack.pop() {
            let components = err.components();
            if components.is_empty() {
                return Some(err);
            }
            self.stack.extend(components.iter().rev());
        }
        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Leaf(message) => f.write_str(message),
            Repr::Other(err) => write!(f, "{}", err),
            Repr::Pair(_) | Repr::Chain(_) => {
                for (i, err) in self.components().iter().enumerate() {
                    if i > 0 {
                        f.write_str(SEPARATOR)?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Leaf(message) => f.debug_tuple("Leaf").field(message).finish(),
            Repr::Pair(pair) => f
                .debug_tuple("Pair")
                .field(&pair[0])
                .field(&pair[1])
                .finish(),
            Repr::Chain(errs) => f.debug_tuple("Chain").field(errs).finish(),
            Repr::Other(err) => f.debug_tuple("Other").field(err).finish(),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.repr {
            Repr::Other(err) => err.source(),
            _ => None,
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Leaf(a), Repr::Leaf(b)) => a == b,
            (Repr::Pair(a), Repr::Pair(b)) => a == b,
            (Repr::Chain(a), Repr::Chain(b)) => a == b,
            (Repr::Other(a), Repr::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Error {}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        match &self.repr {
            Repr::Leaf(message) => serializer.serialize_str(message),
            Repr::Other(err) => serializer.collect_str(err),
            Repr::Pair(pair) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("pair", &pair[..])?;
                map.end()
            }
            Repr::Chain(errs) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("chain", errs)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Disconnected {
        cause: std::io::Error,
    }

    impl fmt::Display for Disconnected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "peer disconnected")
        }
    }

    impl std::error::Error for Disconnected {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.cause)
        }
    }

    #[test]
    fn test_leaf_renders_any_display() {
        assert_eq!(Error::new("plain").to_string(), "plain");
        assert_eq!(Error::new(42).to_string(), "42");
        assert_eq!(Error::new(format_args!("{}-{}", 1, 2)).to_string(), "1-2");
        assert_eq!(Error::new("plain").kind(), ErrorKind::Leaf);
        assert_eq!(Error::new("plain").message(), Some("plain"));
    }

    #[test]
    fn test_composite_rendering_is_recursive() {
        let inner = Error::pair(Error::new("b"), Error::new("c"));
        let err = Error::chain(vec![Error::new("a"), inner, Error::new("d")]);
        assert_eq!(err.to_string(), "a; b; c; d");
        assert_eq!(err.components().len(), 3);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_leaves_in_rendering_order() {
        let inner = Error::chain(vec![Error::new("b"), Error::new("c"), Error::new("d")]);
        let err = Error::pair(Error::new("a"), inner);

        let leaves: Vec<String> = err.leaves().map(ToString::to_string).collect();
        assert_eq!(leaves, vec!["a", "b", "c", "d"]);
        assert_eq!(err.leaf_count(), 4);
        assert_eq!(Error::new("x").leaf_count(), 1);
    }

    #[test]
    fn test_wrapped_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err = Error::wrap(Disconnected { cause: io_err });

        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.to_string(), "peer disconnected");
        assert!(err.components().is_empty());

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("broken pipe"));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Error::new("a"), Error::new("a"));
        assert_ne!(Error::new("a"), Error::new("b"));
        assert_eq!(
            Error::pair(Error::new("a"), Error::new("b")),
            Error::pair(Error::new("a"), Error::new("b"))
        );
        assert_ne!(
            Error::pair(Error::new("a"), Error::new("b")),
            Error::pair(Error::new("b"), Error::new("a"))
        );

        let boxed: Box<dyn std::error::Error + Send + Sync> = "opaque".into();
        let wrapped = Error::wrap_boxed(boxed);
        assert_eq!(wrapped, wrapped.clone());
        assert_ne!(wrapped, Error::new("opaque"));
    }

    #[test]
    fn test_debug() {
        let err = Error::pair(Error::new("a"), Error::new("b"));
        assert_eq!(format!("{:?}", err), r#"Pair(Leaf("a"), Leaf("b"))"#);
    }
}
