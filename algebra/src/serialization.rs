use crate::prelude::*;
use serde::de::{SeqAccess, Visitor};

/// Helper trait to serialize objects that implement from/to bytes
pub trait PedevalFromToBytes: Sized {
    /// Convert to bytes
    fn pedeval_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes
    fn pedeval_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// The visitor accepting bytes, byte sequences, and base64 strings.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("a valid PedevalFromToBytes object")
    }

    fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut vec: Vec<u8> = vec![];
        while let Some(x) = seq.next_element()? {
            vec.push(x);
        }
        Ok(vec)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        b64dec(v).map_err(serde::de::Error::custom)
    }
}

/// Implement serde for a type through its `PedevalFromToBytes` encoding,
/// using base64 for human-readable formats.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use $crate::serialization::PedevalFromToBytes;
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&self.pedeval_to_bytes()))
                } else {
                    serializer.serialize_bytes(&self.pedeval_to_bytes())
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use $crate::serialization::PedevalFromToBytes;
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::BytesVisitor)?
                };
                $t::pedeval_from_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl PedevalFromToBytes for $t {
            fn pedeval_to_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn pedeval_from_bytes(bytes: &[u8]) -> Result<$t> {
                if bytes.len() != <$t as Scalar>::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                $t::from_bytes(bytes)
            }
        }
    };
}

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl PedevalFromToBytes for $g {
            fn pedeval_to_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn pedeval_from_bytes(bytes: &[u8]) -> Result<$g> {
                $g::from_compressed_bytes(bytes)
            }
        }
    };
}

use crate::secp256r1::{SECP256R1Fq, SECP256R1Scalar, SECP256R1G1};

to_from_bytes_scalar!(SECP256R1Scalar);
to_from_bytes_scalar!(SECP256R1Fq);
to_from_bytes_group!(SECP256R1G1);

serialize_deserialize!(SECP256R1Scalar);
serialize_deserialize!(SECP256R1Fq);
serialize_deserialize!(SECP256R1G1);
