//! Serde support for [`Value`] (feature-gated)
//!
//! Decoding a payload into [`Value`] lets the checks run directly against
//! JSON, YAML or any other self-describing format.
//!
//! # Example
//!
//! ```rust,ignore
//! use bad_checks::{is_bad_string, Array, Value};
//!
//! let payload: Value = serde_json::from_str(r#"{"name": 42}"#).unwrap();
//! let Value::Object(fields) = &payload else { unreachable!() };
//!
//! let msgs = Value::from(Array::new());
//! let result = is_bad_string(&"load()".into(), &msgs, &fields["name"], "name").unwrap();
//! assert_eq!(result.explanation(), Some("load(): name is type 'number' not 'string'"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Array, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined => serializer.serialize_unit(),
            Value::Null => serializer.serialize_none(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::BigInt(n) => serializer.serialize_i128(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Symbol(_) => Err(ser::Error::custom("a symbol cannot be serialized")),
            Value::Function(check) => Err(ser::Error::custom(format!(
                "function {}() cannot be serialized",
                check.name()
            ))),
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Array(array) => {
                let items = array.borrow();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any self-describing value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Boolean(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::from(n))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_i128<E: de::Error>(self, n: i128) -> Result<Value, E> {
        Ok(Value::BigInt(n))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::from(s))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(Array::from(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut fields = BTreeMap::new();
        while let Some((k, v)) = map.next_entry::<String, Value>()? {
            fields.insert(k, v);
        }
        Ok(Value::Object(fields))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks;
    use crate::Kind;

    #[test]
    fn test_deserialize_json_kinds() {
        let v: Value =
            serde_json::from_str(r#"{"a": null, "b": [true, "x"], "c": 7, "d": 1.5}"#).unwrap();
        let Value::Object(fields) = v else {
            panic!("expected an object");
        };
        assert_eq!(fields["a"], Value::Null);
        assert_eq!(fields["b"].kind(), Kind::Object);
        assert!(fields["b"].is_array());
        assert_eq!(fields["c"], Value::Number(7.0));
        assert_eq!(fields["d"], Value::Number(1.5));
    }

    #[test]
    fn test_serialize_to_json() {
        let v = Value::from(vec![Value::from("a"), Value::Null, Value::Boolean(false)]);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"["a",null,false]"#);
    }

    #[test]
    fn test_functions_do_not_serialize() {
        let v = Value::from(checks::integer());
        let err = serde_json::to_string(&v).unwrap_err();
        assert!(err.to_string().contains("is_bad_integer()"));
    }
}
