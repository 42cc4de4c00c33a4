use std::fmt;
use std::str::FromStr;

/// Order of the bytes of a multi-byte scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ByteOrder {
    /// Least significant byte first
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the target platform
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    };

    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (ByteOrder::LittleEndian, ByteOrder::LittleEndian)
                | (ByteOrder::BigEndian, ByteOrder::BigEndian)
        )
    }

    /// The other byte order
    pub const fn reversed(self) -> Self {
        match self {
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian",
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`ByteOrder`] from text fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown byte order {input:?}, expected one of little-endian, big-endian or native")]
pub struct ParseByteOrderError {
    pub input: String,
}

impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    /// Accepts the common spellings found in config files, ignoring case, `-` and `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.trim() {
            "le" | "little" | "littleendian" | "dcba" => Ok(ByteOrder::LittleEndian),
            "be" | "big" | "bigendian" | "network" | "abcd" => Ok(ByteOrder::BigEndian),
            "native" => Ok(ByteOrder::NATIVE),
            _ => Err(ParseByteOrderError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Type-level byte order, for call sites that fix the order at compile time
pub trait Endian {
    const ORDER: ByteOrder;
    const IS_NATIVE: bool = Self::ORDER.is_native();
}

pub struct NativeEndian;
pub struct BigEndian;
pub struct LittleEndian;

impl Endian for NativeEndian {
    const ORDER: ByteOrder = ByteOrder::NATIVE;
}

impl Endian for BigEndian {
    const ORDER: ByteOrder = ByteOrder::BigEndian;
}

impl Endian for LittleEndian {
    const ORDER: ByteOrder = ByteOrder::LittleEndian;
}
