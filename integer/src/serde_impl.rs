//! Serde support for [`BigInt`].
//!
//! Values travel as their two's-complement little-endian byte form, the
//! same encoding as [`BigInt::to_bytes`]. Decoding goes through
//! [`BigInt::from_bytes`], which is total, so any byte payload produces
//! a canonical value.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::{BigInt, Endian};

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes(Endian::Little))
    }
}

struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a two's-complement little-endian byte string")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from_bytes(v, Endian::Little))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from_bytes(&v, Endian::Little))
    }

    // formats without a native bytes type hand over a sequence
    fn visit_seq<A>(self, mut seq: A) -> Result<BigInt, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(BigInt::from_bytes(&bytes, Endian::Little))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_byte_buf(BytesVisitor)
    }
}
