//! Wildcard-or-list containers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Borrow;

/// Either a wildcard matching every value, or an explicit list.
///
/// Manifests use this shape twice: for the method set of a permission and
/// for the trust list. In JSON a wildcard is the string `"*"`; a list is a
/// plain array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildcardContainer<T> {
    /// Matches any value.
    Wildcard,
    /// Matches exactly the listed values.
    List(Vec<T>),
}

impl<T> WildcardContainer<T> {
    /// A container holding the given values.
    pub fn create(values: Vec<T>) -> Self {
        Self::List(values)
    }

    /// A container matching anything.
    pub fn create_wildcard() -> Self {
        Self::Wildcard
    }

    /// True for the wildcard form.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Number of explicit values (zero for the wildcard).
    pub fn count(&self) -> usize {
        match self {
            Self::Wildcard => 0,
            Self::List(values) => values.len(),
        }
    }

    /// The explicit values, `None` for the wildcard.
    pub fn values(&self) -> Option<&[T]> {
        match self {
            Self::Wildcard => None,
            Self::List(values) => Some(values),
        }
    }

    /// Collapses the container to an empty explicit list, the first step of
    /// narrowing a wildcard permission down to named entries.
    pub fn restrict(&mut self) {
        *self = Self::List(Vec::new());
    }

    /// Adds a value to the explicit list. A wildcard container is restricted
    /// first, so adding to `*` yields a list of exactly the added value.
    pub fn add(&mut self, value: T) {
        match self {
            Self::Wildcard => *self = Self::List(vec![value]),
            Self::List(values) => values.push(value),
        }
    }

    /// True when the container matches `value`: always for the wildcard, by
    /// equality for a list.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self {
            Self::Wildcard => true,
            Self::List(values) => values.iter().any(|item| item.borrow() == value),
        }
    }
}

impl<T> Default for WildcardContainer<T> {
    fn default() -> Self {
        Self::Wildcard
    }
}

impl<T: Serialize> Serialize for WildcardContainer<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Wildcard => serializer.serialize_str("*"),
            Self::List(values) => values.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for WildcardContainer<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) if s == "*" => Ok(Self::Wildcard),
            value @ Value::Array(_) => {
                let values =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                Ok(Self::List(values))
            }
            other => Err(serde::de::Error::custom(format!(
                "expected \"*\" or an array, found {other}"
            ))),
        }
    }
}
