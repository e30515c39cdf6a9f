//! Key selection and equality used by the comparing operators.
//!
//! Closures work directly: any `Fn(&T) -> K` is a [`KeySelector`] and any
//! `Fn(&K, &K) -> bool` is a [`Comparer`].
//!
//! The default equality is the key type's [`PartialEq`]. That is structural for
//! plain data, whatever the type defines for everything else, and it makes `NaN`
//! unequal to itself.

/// Derives the comparison key of an item.
pub trait KeySelector<T> {
    type Key;

    fn key(&self, item: &T) -> Self::Key;
}

impl<T, K, F> KeySelector<T> for F
where
    F: Fn(&T) -> K,
{
    type Key = K;

    fn key(&self, item: &T) -> K {
        self(item)
    }
}

/// The item is its own key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Clone> KeySelector<T> for Identity {
    type Key = T;

    fn key(&self, item: &T) -> T {
        item.clone()
    }
}

/// Decides whether two keys are equal.
pub trait Comparer<K: ?Sized> {
    fn equals(&self, a: &K, b: &K) -> bool;
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Equality through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultComparer;

impl<K: PartialEq + ?Sized> Comparer<K> for DefaultComparer {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }
}
