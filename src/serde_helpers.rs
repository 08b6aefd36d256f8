//! Serde helpers for flexible deserialization.
//!
//! When the `tracing` feature is enabled, this module also logs warnings for any
//! unknown fields encountered during deserialization, helping detect API changes.

use serde::Deserialize as _;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A `serde_as` type that reads any JSON value as a `bool` using loose truthiness.
///
/// The API is not strict about the type of flags such as `success`: it may send `true`, `1`,
/// `"1"` or omit the field. `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` are false;
/// everything else is true. Combine with `#[serde(default)]` so a missing field reads as false.
pub struct TruthyBool;

impl<'de> serde_with::DeserializeAs<'de, bool> for TruthyBool {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<bool, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| is_truthy(&value))
    }
}

impl serde_with::SerializeAs<bool> for TruthyBool {
    fn serialize_as<S>(source: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(*source)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Deserialize JSON, logging any fields the target type does not capture.
///
/// Unknown fields trigger warnings but do not cause deserialization to fail. On failure the
/// JSON path of the offending value is logged before the error is returned.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    // Kept so the failing path can be recovered with serde_path_to_error
    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let path_result: Result<T, _> = serde_path_to_error::deserialize(&original);
        if let Err(path_err) = path_result {
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path_err.path(),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}
