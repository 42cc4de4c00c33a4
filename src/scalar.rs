use crate::{ScalarKind, ScalarValue};
use std::fmt::Debug;
use std::hash::Hash;

/// A fixed-width scalar that can be packed into and unpacked from bytes
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64` and `bool`.
/// The trait is sealed, no other types can implement it.
#[allow(private_bounds)]
pub trait Scalar: Sealed + Copy + Send + Sync + 'static {
    /// Byte array holding exactly [`Scalar::WIDTH`] bytes
    type Bytes: AsRef<[u8]>
        + AsMut<[u8]>
        + Copy
        + Default
        + Debug
        + Eq
        + Hash
        + Send
        + Sync
        + 'static;

    /// Number of bytes of the packed representation
    const WIDTH: usize = size_of::<Self>();

    const KIND: ScalarKind;

    /// In-memory representation in the platform's byte order
    fn to_native_bytes(self) -> Self::Bytes;

    /// Inverse of [`Scalar::to_native_bytes`], every bit pattern is accepted
    fn from_native_bytes(bytes: Self::Bytes) -> Self;

    fn into_value(self) -> ScalarValue;

    /// Extract `Self` from a [`ScalarValue`] of the same kind
    fn from_value(value: ScalarValue) -> Option<Self>;
}

pub(crate) trait Sealed {}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Sealed for $ty {}

        impl Scalar for $ty {
            type Bytes = [u8; size_of::<$ty>()];

            const KIND: ScalarKind = ScalarKind::$kind;

            #[inline(always)]
            fn to_native_bytes(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline(always)]
            fn from_native_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }

            #[inline(always)]
            fn into_value(self) -> ScalarValue {
                ScalarValue::$kind(self)
            }

            #[inline(always)]
            fn from_value(value: ScalarValue) -> Option<Self> {
                match value {
                    ScalarValue::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

impl_scalar! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

impl Sealed for bool {}

/// Packs as a single byte, `1` for `true` and `0` for `false`.
/// When unpacking any nonzero byte is `true`.
impl Scalar for bool {
    type Bytes = [u8; 1];

    const KIND: ScalarKind = ScalarKind::Bool;

    #[inline(always)]
    fn to_native_bytes(self) -> Self::Bytes {
        [u8::from(self)]
    }

    #[inline(always)]
    fn from_native_bytes(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }

    #[inline(always)]
    fn into_value(self) -> ScalarValue {
        ScalarValue::Bool(self)
    }

    #[inline(always)]
    fn from_value(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}
