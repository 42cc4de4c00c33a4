use crate::{ByteOrder, Error, Scalar, codec};
use std::fmt;

/// Type tag of every supported scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScalarKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
}

impl ScalarKind {
    /// Number of bytes of the packed representation
    pub const fn width(self) -> usize {
        use ScalarKind::*;

        match self {
            U8 | I8 | Bool => 1,
            U16 | I16 => 2,
            U32 | I32 | F32 => 4,
            U64 | I64 | F64 => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        use ScalarKind::*;

        match self {
            U8 => "u8",
            U16 => "u16",
            U32 => "u32",
            U64 => "u64",
            I8 => "i8",
            I16 => "i16",
            I32 => "i32",
            I64 => "i64",
            F32 => "f32",
            F64 => "f64",
            Bool => "bool",
        }
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        use ScalarKind::*;

        [U8, U16, U32, U64, I8, I16, I32, I64, F32, F64, Bool]
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar whose type is only known at runtime
///
/// Equality compares floats by their bits, so `NaN` equals itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Copy)]
pub enum ScalarValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
}

impl ScalarValue {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::U8(_) => ScalarKind::U8,
            ScalarValue::U16(_) => ScalarKind::U16,
            ScalarValue::U32(_) => ScalarKind::U32,
            ScalarValue::U64(_) => ScalarKind::U64,
            ScalarValue::I8(_) => ScalarKind::I8,
            ScalarValue::I16(_) => ScalarKind::I16,
            ScalarValue::I32(_) => ScalarKind::I32,
            ScalarValue::I64(_) => ScalarKind::I64,
            ScalarValue::F32(_) => ScalarKind::F32,
            ScalarValue::F64(_) => ScalarKind::F64,
            ScalarValue::Bool(_) => ScalarKind::Bool,
        }
    }

    pub fn width(&self) -> usize {
        self.kind().width()
    }

    /// Pack the value into exactly [`ScalarValue::width`] bytes using the given byte order
    pub fn pack(self, order: ByteOrder) -> Vec<u8> {
        fn pack<T: Scalar>(v: T, order: ByteOrder) -> Vec<u8> {
            codec::pack(v, order).as_ref().to_vec()
        }

        match self {
            ScalarValue::U8(v) => pack(v, order),
            ScalarValue::U16(v) => pack(v, order),
            ScalarValue::U32(v) => pack(v, order),
            ScalarValue::U64(v) => pack(v, order),
            ScalarValue::I8(v) => pack(v, order),
            ScalarValue::I16(v) => pack(v, order),
            ScalarValue::I32(v) => pack(v, order),
            ScalarValue::I64(v) => pack(v, order),
            ScalarValue::F32(v) => pack(v, order),
            ScalarValue::F64(v) => pack(v, order),
            ScalarValue::Bool(v) => pack(v, order),
        }
    }

    /// Unpack a value of the given `kind` from `bytes`
    ///
    /// Fails with [`Error::LengthMismatch`] if the length of `bytes` is not `kind.width()`.
    pub fn unpack(bytes: &[u8], kind: ScalarKind, order: ByteOrder) -> Result<Self, Error> {
        fn unpack<T: Scalar>(bytes: &[u8], order: ByteOrder) -> Result<ScalarValue, Error> {
            codec::unpack::<T>(bytes, order).map(T::into_value)
        }

        match kind {
            ScalarKind::U8 => unpack::<u8>(bytes, order),
            ScalarKind::U16 => unpack::<u16>(bytes, order),
            ScalarKind::U32 => unpack::<u32>(bytes, order),
            ScalarKind::U64 => unpack::<u64>(bytes, order),
            ScalarKind::I8 => unpack::<i8>(bytes, order),
            ScalarKind::I16 => unpack::<i16>(bytes, order),
            ScalarKind::I32 => unpack::<i32>(bytes, order),
            ScalarKind::I64 => unpack::<i64>(bytes, order),
            ScalarKind::F32 => unpack::<f32>(bytes, order),
            ScalarKind::F64 => unpack::<f64>(bytes, order),
            ScalarKind::Bool => unpack::<bool>(bytes, order),
        }
    }

    /// Returns the contained value if it is a `T`
    pub fn get<T: Scalar>(self) -> Option<T> {
        T::from_value(self)
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        use ScalarValue::*;

        match (*self, *other) {
            (U8(a), U8(b)) => a == b,
            (U16(a), U16(b)) => a == b,
            (U32(a), U32(b)) => a == b,
            (U64(a), U64(b)) => a == b,
            (I8(a), I8(b)) => a == b,
            (I16(a), I16(b)) => a == b,
            (I32(a), I32(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (F32(a), F32(b)) => a.to_bits() == b.to_bits(),
            (F64(a), F64(b)) => a.to_bits() == b.to_bits(),
            (Bool(a), Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ScalarValue {}

macro_rules! impl_from {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for ScalarValue {
            fn from(value: $ty) -> Self {
                value.into_value()
            }
        }
    )*};
}

impl_from!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_width() {
        assert_eq!(ScalarValue::from(1u8).kind(), ScalarKind::U8);
        assert_eq!(ScalarValue::from(-1i64).kind(), ScalarKind::I64);
        assert_eq!(ScalarValue::from(0.5f32).width(), 4);
        assert_eq!(ScalarValue::from(true).width(), 1);
    }

    #[test]
    fn pack_matches_generic() {
        let order = ByteOrder::BigEndian;

        assert_eq!(ScalarValue::from(1.0f64).pack(order), codec::pack(1.0f64, order));
        assert_eq!(ScalarValue::from(-1i32).pack(order), vec![255; 4]);
        assert_eq!(ScalarValue::from(true).pack(order), vec![1]);
        assert_eq!(
            ScalarValue::from(0x0102u16).pack(ByteOrder::LittleEndian),
            vec![2, 1]
        );
    }

    #[test]
    fn unpack_by_kind() {
        let v = ScalarValue::unpack(
            &[0, 0, 0, 0, 0, 0, 240, 63],
            ScalarKind::F64,
            ByteOrder::LittleEndian,
        );
        assert_eq!(v, Ok(ScalarValue::F64(1.0)));

        let v = ScalarValue::unpack(&[0], ScalarKind::Bool, ByteOrder::NATIVE);
        assert_eq!(v, Ok(ScalarValue::Bool(false)));

        let v = ScalarValue::unpack(&[0xFF, 0xFE], ScalarKind::I16, ByteOrder::BigEndian);
        assert_eq!(v, Ok(ScalarValue::I16(-2)));
    }

    #[test]
    fn unpack_rejects_wrong_length() {
        for kind in ScalarKind::variants() {
            let too_long = vec![0u8; kind.width() + 1];
            assert_eq!(
                ScalarValue::unpack(&too_long, kind, ByteOrder::BigEndian),
                Err(Error::LengthMismatch {
                    expected: kind.width(),
                    got: kind.width() + 1
                })
            );

            let too_short = vec![0u8; kind.width() - 1];
            assert_eq!(
                ScalarValue::unpack(&too_short, kind, ByteOrder::LittleEndian),
                Err(Error::LengthMismatch {
                    expected: kind.width(),
                    got: kind.width() - 1
                })
            );
        }
    }

    #[test]
    fn floats_compare_by_bits() {
        assert_eq!(ScalarValue::F64(f64::NAN), ScalarValue::F64(f64::NAN));
        assert_eq!(ScalarValue::F32(f32::NAN), ScalarValue::F32(f32::NAN));
        assert_ne!(ScalarValue::F64(0.0), ScalarValue::F64(-0.0));
        assert_ne!(ScalarValue::F32(1.0), ScalarValue::F64(1.0));
        assert_ne!(ScalarValue::U8(1), ScalarValue::I8(1));
    }

    #[test]
    fn special_floats_round_trip() {
        let values = [
            ScalarValue::F64(f64::NAN),
            ScalarValue::F64(f64::from_bits(0x7FF8_0000_DEAD_BEEF)),
            ScalarValue::F64(-0.0),
            ScalarValue::F64(f64::from_bits(1)),
            ScalarValue::F64(f64::NEG_INFINITY),
            ScalarValue::F32(f32::NAN),
            ScalarValue::F32(f32::from_bits(0xFFC0_0001)),
            ScalarValue::F32(-0.0),
            ScalarValue::F32(f32::from_bits(0x0000_0001)),
        ];

        for value in values {
            for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
                let bytes = value.pack(order);
                assert_eq!(ScalarValue::unpack(&bytes, value.kind(), order), Ok(value));
            }
        }
    }

    #[test]
    fn get() {
        assert_eq!(ScalarValue::from(3u32).get::<u32>(), Some(3));
        assert_eq!(ScalarValue::from(3u32).get::<i32>(), None);
    }

    #[test]
    fn display() {
        assert_eq!(ScalarKind::F64.to_string(), "f64");
        assert_eq!(ScalarKind::Bool.to_string(), "bool");
    }
}
