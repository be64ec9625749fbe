//! Index-friendly reordering of UUID fields.

#[cfg(not(feature = "std"))]
use core as std;

use crate::{ParseError, Uuid};
use fstr::FStr;
use std::{fmt, str};

/// Positions of the standard UUID bytes in the optimized layout: `time_hi_and_version`,
/// `time_mid`, `time_low`, then `clock_seq` and `node` unchanged.
const TO_OPTIMIZED: [usize; 16] = [6, 7, 4, 5, 0, 1, 2, 3, 8, 9, 10, 11, 12, 13, 14, 15];

/// Positions of the optimized bytes in the standard layout.
const TO_STANDARD: [usize; 16] = [4, 5, 6, 7, 2, 3, 0, 1, 8, 9, 10, 11, 12, 13, 14, 15];

/// Represents a UUID whose fields have been reordered so that the fast-changing high timestamp
/// comes first and the clock sequence and node trail at the end.
///
/// The byte array, the derived [`Ord`] impl, and the 32-digit string representation all follow
/// the same order, so values can be stored in a `BINARY(16)` column as they are and be compared
/// there consistently.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::{OptimizedUuid, Uuid};
///
/// let standard = "58e0a7d7-eebc-11d8-9669-0800200c9a66".parse::<Uuid>()?;
/// let optimized = OptimizedUuid::from(standard);
/// assert_eq!(optimized.encode().as_str(), "11D8EEBC58E0A7D796690800200C9A66");
/// assert_eq!(optimized.to_standard(), standard);
/// # Ok::<(), optimized_uuid::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct OptimizedUuid([u8; 16]);

impl OptimizedUuid {
    /// Nil UUID in the optimized layout (all zeros)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID in the optimized layout (all ones)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the reordered byte array, ready to be stored in a `BINARY(16)`
    /// column.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Converts the value back to the standard byte order.
    pub const fn to_standard(&self) -> Uuid {
        Uuid::from_bytes(permute(&self.0, &TO_STANDARD))
    }

    /// Returns the 32-digit upper-case hexadecimal string representation without separators.
    pub fn encode(&self) -> FStr<32> {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut buffer = [0u8; 32];
        for (i, e) in self.0.iter().enumerate() {
            buffer[i * 2] = DIGITS[(e >> 4) as usize];
            buffer[i * 2 + 1] = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

const fn permute(src: &[u8; 16], positions: &[usize; 16]) -> [u8; 16] {
    let mut dst = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        dst[i] = src[positions[i]];
        i += 1;
    }
    dst
}

impl From<Uuid> for OptimizedUuid {
    fn from(src: Uuid) -> Self {
        Self(permute(src.as_bytes(), &TO_OPTIMIZED))
    }
}

impl From<OptimizedUuid> for Uuid {
    fn from(src: OptimizedUuid) -> Self {
        src.to_standard()
    }
}

impl fmt::Display for OptimizedUuid {
    /// Returns the 32-digit upper-case hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for OptimizedUuid {
    type Err = ParseError;

    /// Creates an object from the 32-digit hexadecimal string representation in either case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for e in dst.iter_mut() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<OptimizedUuid> for [u8; 16] {
    fn from(src: OptimizedUuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for OptimizedUuid {
    /// Wraps bytes that are already in the optimized order, e.g. as read from a database column.
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for OptimizedUuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<OptimizedUuid> for u128 {
    fn from(src: OptimizedUuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for OptimizedUuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{OptimizedUuid, ParseError};

    impl From<OptimizedUuid> for String {
        fn from(src: OptimizedUuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for OptimizedUuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, OptimizedUuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for OptimizedUuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for OptimizedUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = OptimizedUuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "an optimized UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::OptimizedUuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes in the reordered form
        #[test]
        fn serializes_and_deserializes_in_the_reordered_form() {
            let text = "11D8EEBC58E0A7D796690800200C9A66";
            let bytes: &[u8] = &[
                17, 216, 238, 188, 88, 224, 167, 215, 150, 105, 8, 0, 32, 12, 154, 102,
            ];
            let e = text.parse::<OptimizedUuid>().unwrap();
            assert_tokens(&e.readable(), &[Token::String(text)]);
            assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
        }
    }
}
