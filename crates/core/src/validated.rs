//! Validation results that carry every failure instead of the first one.

use serde::Serialize;

use crate::error::AdapterError;

/// Either a success value or a non-empty, ordered list of error messages.
pub type Validated<T> = Result<T, NonEmptyVec<String>>;

/// A vector guaranteed to hold at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NonEmptyVec<T>(Vec<T>);

impl<T> NonEmptyVec<T> {
    pub fn one(head: T) -> Self {
        Self(vec![head])
    }

    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head);
        items.extend(tail);
        Self(items)
    }

    /// Returns `None` when `items` is empty.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    pub fn head(&self) -> &T {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn append(&mut self, other: NonEmptyVec<T>) {
        self.0.extend(other.0);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<AdapterError> for NonEmptyVec<String> {
    fn from(err: AdapterError) -> Self {
        NonEmptyVec::one(err.to_string())
    }
}

/// Shorthand for a single-message failure.
pub fn invalid<T>(err: AdapterError) -> Validated<T> {
    Err(err.into())
}
