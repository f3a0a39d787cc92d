//! Field decoders for FUTBIN payloads, which send numbers as JSON numbers,
//! numeric strings (`"12,500"`), empty strings or `null` depending on the
//! endpoint.
//!
//! Counts and prices are non-negative whole numbers. Absent, `null` and `""`
//! decode to 0. A negative or fractional value is rejected the same way a
//! non-numeric string is, whether it arrives as a number or as text.

use serde::de::value::StringDeserializer;
use serde::de::{Deserialize, Deserializer, Error, IntoDeserializer};
use serde_json::{Map, Value};

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

fn parse_u64<E: Error>(raw: Option<Loose>) -> Result<u64, E> {
    match raw {
        None => Ok(0),
        Some(Loose::Int(n)) => {
            u64::try_from(n).map_err(|_| E::custom(format!("expected a count, found {n}")))
        }
        Some(Loose::Float(n)) if n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => {
            Ok(n as u64)
        }
        Some(Loose::Float(n)) => Err(E::custom(format!("expected a count, found {n}"))),
        Some(Loose::Text(s)) => {
            let digits: String = s.trim().chars().filter(|c| *c != ',').collect();
            if digits.is_empty() {
                return Ok(0);
            }
            digits
                .parse::<u64>()
                .map_err(|_| E::custom(format!("expected a number, found {s:?}")))
        }
    }
}

pub(crate) fn u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    parse_u64(Option::<Loose>::deserialize(deserializer)?)
}

pub(crate) fn u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = parse_u64(Option::<Loose>::deserialize(deserializer)?)?;
    u32::try_from(n).map_err(|_| D::Error::custom(format!("{n} out of range")))
}

/// Absent or `null` stays `None`; anything else decodes like [`u32`].
pub(crate) fn opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(None),
        raw => {
            let n = parse_u64(raw)?;
            u32::try_from(n)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("{n} out of range")))
        }
    }
}

pub(crate) fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => String::new(),
        Some(Loose::Int(n)) => n.to_string(),
        Some(Loose::Float(n)) => n.to_string(),
        Some(Loose::Text(s)) => s,
    })
}

/// Decodes an enum from its wire string; absent, `null` and `""` are `None`.
pub(crate) fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => {
            let raw: StringDeserializer<D::Error> = raw.into_deserializer();
            T::deserialize(raw).map(Some)
        }
        _ => Ok(None),
    }
}

/// `null` decodes to the type's default instead of failing.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a JSON object whose fields may arrive under a second key. For each
/// `(key, fallback)` pair the fallback is removed and only kept when `key` is
/// absent or `null`.
pub(crate) fn object_with_fallbacks<'de, D: Deserializer<'de>>(
    deserializer: D,
    fallbacks: &[(&str, &str)],
) -> Result<Value, D::Error> {
    let mut object = Map::<String, Value>::deserialize(deserializer)?;
    for (key, fallback) in fallbacks {
        if let Some(value) = object.remove(*fallback) {
            if object.get(*key).map_or(true, Value::is_null) {
                object.insert((*key).to_string(), value);
            }
        }
    }
    Ok(Value::Object(object))
}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Default)]
    struct Row {
        #[serde(default, deserialize_with = "super::u64")]
        price: u64,
        #[serde(default, deserialize_with = "super::u32")]
        rating: u32,
        #[serde(default, deserialize_with = "super::opt_u32")]
        club_id: Option<u32>,
        #[serde(default, deserialize_with = "super::string")]
        name: String,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_from_any_shape() {
        assert_eq!(row(r#"{"price": 12500}"#).price, 12500);
        assert_eq!(row(r#"{"price": "12500"}"#).price, 12500);
        assert_eq!(row(r#"{"price": "1,250,000"}"#).price, 1_250_000);
        assert_eq!(row(r#"{"price": 99.0}"#).price, 99);
        assert_eq!(row(r#"{"price": ""}"#).price, 0);
        assert_eq!(row(r#"{"price": null}"#).price, 0);
        assert_eq!(row(r#"{}"#).price, 0);
        assert_eq!(row(r#"{"rating": "91"}"#).rating, 91);
        assert_eq!(row(r#"{"rating": 91.0}"#).rating, 91);
    }

    #[test]
    fn test_negative_and_fractional_numbers_are_errors() {
        for json in [
            r#"{"price": -5}"#,
            r#"{"price": "-5"}"#,
            r#"{"price": 99.7}"#,
            r#"{"price": -1.0}"#,
        ] {
            assert!(serde_json::from_str::<Row>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_fallback_key_fills_in_only_when_primary_is_missing() {
        let pairs = [("pac", "pace")];
        let decode = |json: &str| {
            let mut de = serde_json::Deserializer::from_str(json);
            super::object_with_fallbacks(&mut de, &pairs).unwrap()
        };

        assert_eq!(decode(r#"{"pace": 90}"#), serde_json::json!({"pac": 90}));
        assert_eq!(decode(r#"{"pac": 88, "pace": 90}"#), serde_json::json!({"pac": 88}));
        assert_eq!(decode(r#"{"pac": null, "pace": 90}"#), serde_json::json!({"pac": 90}));
        assert_eq!(decode(r#"{"sho": 70}"#), serde_json::json!({"sho": 70}));
    }

    #[test]
    fn test_optional_ids() {
        assert_eq!(row(r#"{"club_id": "243"}"#).club_id, Some(243));
        assert_eq!(row(r#"{"club_id": null}"#).club_id, None);
        assert_eq!(row(r#"{}"#).club_id, None);
    }

    #[test]
    fn test_strings_tolerate_null_and_numbers() {
        assert_eq!(row(r#"{"name": null}"#).name, "");
        assert_eq!(row(r#"{"name": 7}"#).name, "7");
        assert_eq!(row(r#"{"name": "Mbappé"}"#).name, "Mbappé");
    }

    #[test]
    fn test_garbage_number_is_an_error() {
        assert!(serde_json::from_str::<Row>(r#"{"rating": "ninety"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"rating": 5000000000}"#).is_err());
    }
}
