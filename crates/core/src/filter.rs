//! The filter extracted from a model reply.

use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Message returned when a reply carries no usable filter.
pub const EMPTY_QUERY_MESSAGE: &str = "Empty or invalid query generated.";

/// A non-empty field → criterion mapping, applied unmodified to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Filter(Map<String, Value>);

impl Filter {
    /// Wrap a mapping, refusing an empty one.
    pub fn new(map: Map<String, Value>) -> Option<Self> {
        if map.is_empty() {
            None
        } else {
            Some(Self(map))
        }
    }

    /// Extract the `query` object from a parsed reply.
    ///
    /// Anything other than a reply object holding a non-empty `query` object
    /// is an [`AppError::InvalidQuery`].
    pub fn from_reply(reply: Value) -> AppResult<Self> {
        let Value::Object(mut reply) = reply else {
            return Err(empty_query());
        };

        match reply.remove("query") {
            Some(Value::Object(map)) => Self::new(map).ok_or_else(empty_query),
            _ => Err(empty_query()),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl TryFrom<Value> for Filter {
    type Error = AppError;

    /// Treat `value` itself as the filter (no `query` wrapper).
    fn try_from(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(map) => Self::new(map).ok_or_else(empty_query),
            _ => Err(empty_query()),
        }
    }
}

fn empty_query() -> AppError {
    AppError::InvalidQuery(EMPTY_QUERY_MESSAGE.to_string())
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}
