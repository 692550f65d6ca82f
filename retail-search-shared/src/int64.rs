//! 64-bit integers travel as JSON strings in the service's JSON mapping.
//! Decoding accepts both strings and plain numbers.

use serde::{de, Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(i64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(n) => Ok(n),
        Repr::Text(s) => s.parse().map_err(de::Error::custom),
    }
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
