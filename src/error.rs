use thiserror::Error;

/// Failure of a reducing operator.
///
/// Keeps "there was no data" apart from "something broke", so callers can branch
/// on the two without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SeqError<E> {
    /// The sequence produced no items, so there is no result to report.
    #[error("sequence contains no elements")]
    Empty,

    /// A pull from the source, or a selector applied to an item, failed.
    #[error("upstream failure: {0}")]
    Upstream(E),
}

impl<E> SeqError<E> {
    /// Returns `true` for [`SeqError::Empty`].
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, SeqError::Empty)
    }

    /// Borrow the upstream failure, if that is what this is.
    pub const fn upstream(&self) -> Option<&E> {
        match self {
            SeqError::Upstream(err) => Some(err),
            SeqError::Empty => None,
        }
    }

    /// Take the upstream failure, if that is what this is.
    pub fn into_upstream(self) -> Option<E> {
        match self {
            SeqError::Upstream(err) => Some(err),
            SeqError::Empty => None,
        }
    }
}

/// Failure to resolve an operator by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no operator registered under `{0}`")]
    UnknownOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(SeqError::<&str>::Empty.to_string(), "sequence contains no elements");
        assert_eq!(SeqError::Upstream("disk").to_string(), "upstream failure: disk");
        assert_eq!(
            RegistryError::UnknownOperator("zip".into()).to_string(),
            "no operator registered under `zip`"
        );
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        let empty: SeqError<&str> = SeqError::Empty;
        let broken = SeqError::Upstream("io");

        assert!(empty.is_empty_sequence());
        assert!(!broken.is_empty_sequence());
        assert_eq!(broken.upstream(), Some(&"io"));
        assert_eq!(empty.into_upstream(), None);
    }
}
