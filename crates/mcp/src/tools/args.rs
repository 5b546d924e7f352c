// Typed access to the argument bag of a tool call

use crate::error::{ArgumentError, ArgumentReason};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// How comma-separated list arguments are split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListSplitMode {
    /// Literal split on `,`. Whitespace and empty entries are kept.
    #[default]
    Verbatim,
    /// Trim every entry and drop the blank ones.
    Trimmed,
}

/// Decode a typed parameter struct from the argument bag
pub trait FromArguments: Sized {
    fn from_arguments(args: &Arguments) -> Result<Self, ArgumentError>;
}

/// Arguments of a single tool call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Map<String, Value>,
}

impl Arguments {
    /// Wrap the `arguments` value of a call. `null` is an empty bag.
    pub fn from_value(value: Value) -> Result<Self, ArgumentError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(values) => Ok(Self { values }),
            _ => Err(ArgumentError::wrong_type("arguments")),
        }
    }

    /// Look up a key; explicit nulls count as absent.
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    pub fn decode<T: FromArguments>(&self) -> Result<T, ArgumentError> {
        T::from_arguments(self)
    }

    pub fn required_str(&self, key: &str) -> Result<String, ArgumentError> {
        self.optional_str(key)?
            .ok_or_else(|| ArgumentError::missing(key))
    }

    pub fn optional_str(&self, key: &str) -> Result<Option<String>, ArgumentError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ArgumentError::wrong_type(key)),
        }
    }

    /// Optional string where an empty value means "not given".
    pub fn optional_non_empty_str(&self, key: &str) -> Result<Option<String>, ArgumentError> {
        Ok(self.optional_str(key)?.filter(|s| !s.is_empty()))
    }

    /// Optional number, kept exactly as supplied (no float coercion).
    pub fn optional_number(&self, key: &str) -> Result<Option<Number>, ArgumentError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n.clone())),
            Some(_) => Err(ArgumentError::wrong_type(key)),
        }
    }

    pub fn number_or(&self, key: &str, default: impl Into<Number>) -> Result<Number, ArgumentError> {
        Ok(self.optional_number(key)?.unwrap_or_else(|| default.into()))
    }

    /// Required comma-separated list.
    pub fn required_list(&self, key: &str, mode: ListSplitMode) -> Result<Vec<String>, ArgumentError> {
        let raw = self.required_str(key)?;
        let parts = raw.split(',');

        match mode {
            ListSplitMode::Verbatim => Ok(parts.map(str::to_string).collect()),
            ListSplitMode::Trimmed => {
                let items: Vec<String> = parts
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect();
                if items.is_empty() {
                    return Err(ArgumentError::new(key, ArgumentReason::Empty));
                }
                Ok(items)
            }
        }
    }

    /// Required list given as a JSON-encoded string or as a JSON array.
    pub fn required_json_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, ArgumentError> {
        match self.get(key) {
            None => Err(ArgumentError::missing(key)),
            Some(Value::String(encoded)) => {
                let decoded: Value = serde_json::from_str(encoded)
                    .map_err(|_| ArgumentError::new(key, ArgumentReason::InvalidJson))?;
                decode_list(key, decoded)
            }
            Some(array @ Value::Array(_)) => decode_list(key, array.clone()),
            Some(_) => Err(ArgumentError::wrong_type(key)),
        }
    }

    /// Optional string restricted to the variants of `T`.
    pub fn optional_enum<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ArgumentError> {
        match self.get(key) {
            None => Ok(None),
            Some(value @ Value::String(_)) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|_| ArgumentError::new(key, ArgumentReason::InvalidValue)),
            Some(_) => Err(ArgumentError::wrong_type(key)),
        }
    }
}

fn decode_list<T: DeserializeOwned>(key: &str, value: Value) -> Result<Vec<T>, ArgumentError> {
    serde_json::from_value(value).map_err(|_| ArgumentError::new(key, ArgumentReason::InvalidValue))
}
