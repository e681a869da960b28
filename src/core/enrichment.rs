//! Tagged input for entry enrichment
//!
//! `Enrichment` is what `with` accepts. Each variant selects one merge rule
//! in [`LogContext::enrich`](super::LogContext::enrich): absent values are
//! ignored, errors land under `"error"`, maps are merged key by key, records
//! are stored under their type name and anything else is appended to the
//! `"values"` list.
//!
//! Most callers never name the type: plain scalars, maps and `Option`s
//! convert through `From`. Errors and serializable records go through the
//! explicit constructors.
//!
//! ```
//! use entry_logger::{Enrichment, Logger};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//! }
//!
//! let logger = Logger::new();
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! let entry = logger
//!     .with("request-42")
//!     .with(Enrichment::record(&User { name: "john".into() }))
//!     .with(Enrichment::error(&err))
//!     .into_entry();
//!
//! assert!(entry.data.get("User").is_some());
//! assert!(entry.data.get("error").is_some());
//! ```

use super::error::Result;
use super::log_context::{FieldValue, LogContext};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    /// Nothing to merge
    Absent,
    /// Description of an error, stored under `"error"`
    Error(String),
    /// Key/value pairs copied into the entry
    Map(BTreeMap<String, FieldValue>),
    /// A structured value stored under its type name
    Record { type_name: String, value: FieldValue },
    /// An un-keyed value appended to `"values"`
    Scalar(FieldValue),
}

impl Enrichment {
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Enrichment::Error(err.to_string())
    }

    /// Serialize `value` as a record keyed by its short type name.
    ///
    /// A value that cannot be serialized is reported on stderr and becomes
    /// `Absent`.
    pub fn record<T: Serialize + ?Sized>(value: &T) -> Self {
        match Self::try_record(value) {
            Ok(enrichment) => enrichment,
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Skipping record of type {}: {}",
                    std::any::type_name::<T>(),
                    e
                );
                Enrichment::Absent
            }
        }
    }

    pub fn try_record<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Self::try_named_record(short_type_name::<T>(), value)
    }

    /// Like [`record`](Self::record), with an explicit key.
    pub fn named_record<T: Serialize + ?Sized>(type_name: impl Into<String>, value: &T) -> Self {
        let type_name = type_name.into();
        match Self::try_named_record(type_name.clone(), value) {
            Ok(enrichment) => enrichment,
            Err(e) => {
                eprintln!("[LOGGER ERROR] Skipping record '{}': {}", type_name, e);
                Enrichment::Absent
            }
        }
    }

    fn try_named_record<T: Serialize + ?Sized>(
        type_name: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        let value = serde_json::to_value(value)?;
        Ok(Enrichment::Record {
            type_name: type_name.into(),
            value: FieldValue::from(value),
        })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Enrichment::Absent)
    }
}

/// Last path segment of a type name, without generic arguments.
///
/// Tuples, arrays and other unnamed types map to the empty string.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let full = full.trim_start_matches('&').trim_start_matches("mut ");
    if full.starts_with('(') || full.starts_with('[') {
        return String::new();
    }
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
        .to_string()
}

impl From<()> for Enrichment {
    fn from(_: ()) -> Self {
        Enrichment::Absent
    }
}

impl<T: Into<Enrichment>> From<Option<T>> for Enrichment {
    fn from(value: Option<T>) -> Self {
        value.map_or(Enrichment::Absent, Into::into)
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Enrichment {
                fn from(value: $ty) -> Self {
                    Enrichment::Scalar(FieldValue::from(value))
                }
            }
        )*
    };
}

impl_scalar!(
    String, &str, &String, char, bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64
);

impl From<FieldValue> for Enrichment {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Enrichment::Absent,
            FieldValue::Map(map) => Enrichment::Map(map),
            other => Enrichment::Scalar(other),
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> From<HashMap<K, V>> for Enrichment {
    fn from(map: HashMap<K, V>) -> Self {
        Enrichment::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> From<BTreeMap<K, V>> for Enrichment {
    fn from(map: BTreeMap<K, V>) -> Self {
        Enrichment::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<LogContext> for Enrichment {
    fn from(context: LogContext) -> Self {
        Enrichment::Map(context.into_iter().collect())
    }
}

impl From<std::io::Error> for Enrichment {
    fn from(err: std::io::Error) -> Self {
        Enrichment::error(&err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Enrichment {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Enrichment::Error(err.to_string())
    }
}

impl From<super::error::LoggerError> for Enrichment {
    fn from(err: super::error::LoggerError) -> Self {
        Enrichment::error(&err)
    }
}
