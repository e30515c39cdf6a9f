//! Name-based operator lookup.
//!
//! A [`Registry`] maps names to operators over one container type, for callers
//! that pick operators at runtime (from configuration, a query string, a plugin).
//! Registries are plain owned values. There is no process-wide table.
//!
//! Registering a name that is already bound replaces the old operator without
//! an error or a warning: the last registration wins. `register` hands back the
//! replaced operator so callers that care can detect the collision.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::container::{AsyncSeq, Seq};
use crate::error::RegistryError;
use crate::sequence::{BoxAsyncSequence, BoxSequence};

/// Operator stored in a [`Registry`].
pub type RegisteredOperator<Q> = Arc<dyn Fn(Q) -> Q + Send + Sync>;

/// Registry over type-erased synchronous containers.
pub type SeqRegistry<T, E> = Registry<Seq<BoxSequence<T, E>>>;

/// Registry over type-erased asynchronous containers.
pub type AsyncSeqRegistry<T, E> = Registry<AsyncSeq<BoxAsyncSequence<T, E>>>;

/// Table of named operators from `Q` to `Q`.
pub struct Registry<Q> {
    operators: HashMap<Arc<str>, RegisteredOperator<Q>>,
}

impl<Q> Registry<Q> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Bind `operator` to `name`, returning the operator it replaced.
    pub fn register<F>(&mut self, name: impl Into<Arc<str>>, operator: F) -> Option<RegisteredOperator<Q>>
    where
        F: Fn(Q) -> Q + Send + Sync + 'static,
    {
        let name = name.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(operator = %name, "registering operator");
        let previous = self.operators.insert(name, Arc::new(operator));
        #[cfg(feature = "tracing")]
        if previous.is_some() {
            tracing::trace!("replaced an existing binding");
        }
        previous
    }

    /// Remove the binding for `name`.
    pub fn unregister(&mut self, name: &str) -> Option<RegisteredOperator<Q>> {
        self.operators.remove(name)
    }

    /// Get an operator by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredOperator<Q>> {
        self.operators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Apply the operator bound to `name`.
    pub fn apply(&self, name: &str, source: Q) -> Result<Q, RegistryError> {
        match self.get(name) {
            Some(operator) => Ok(operator(source)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(operator = name, "unknown operator");
                Err(RegistryError::UnknownOperator(name.to_owned()))
            }
        }
    }

    /// Apply the operators bound to `names`, left to right.
    ///
    /// Every name is resolved before any operator runs, so an unknown name
    /// leaves `source` untouched.
    pub fn apply_all<'n, I>(&self, names: I, source: Q) -> Result<Q, RegistryError>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let operators = names
            .into_iter()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| RegistryError::UnknownOperator(name.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(operators.into_iter().fold(source, |acc, operator| operator(acc)))
    }
}

impl<T, E> Registry<Seq<BoxSequence<T, E>>>
where
    T: Clone + PartialEq + 'static,
    E: 'static,
{
    /// Create a registry with the built-in lazy operators bound.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("distinct_until_changed", |seq: Seq<BoxSequence<T, E>>| {
            seq.distinct_until_changed().boxed()
        });
        registry
    }
}

impl<T, E> Registry<AsyncSeq<BoxAsyncSequence<T, E>>>
where
    T: Clone + PartialEq + 'static,
    E: 'static,
{
    /// Create a registry with the built-in lazy operators bound.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("distinct_until_changed", |seq: AsyncSeq<BoxAsyncSequence<T, E>>| {
            seq.distinct_until_changed().boxed()
        });
        registry
    }
}

impl<Q> Default for Registry<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for Registry<Q> {
    fn clone(&self) -> Self {
        Self {
            operators: self.operators.clone(),
        }
    }
}

impl<Q> fmt::Debug for Registry<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("operators", &names).finish()
    }
}
