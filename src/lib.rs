//! Pack fixed-width scalars into bytes and back, with explicit control over the byte order.
//!
//! Supported are `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64` and `bool`.
//! Integers use their two's-complement layout, floats their IEEE-754 layout and `bool` a single
//! byte (`1` for `true`, any nonzero byte unpacks as `true`).
//!
//! ```
//! use byte_backpack::{pack, unpack, ByteOrder};
//!
//! let bytes = pack(1.0f64, ByteOrder::BigEndian);
//! assert_eq!(bytes, [63, 240, 0, 0, 0, 0, 0, 0]);
//!
//! let value: f64 = unpack(&bytes, ByteOrder::BigEndian)?;
//! assert_eq!(value, 1.0);
//! # Ok::<(), byte_backpack::Error>(())
//! ```
//!
//! When the type is only known at runtime use [`ScalarValue`] and [`ScalarKind`].

pub use codec::{pack, pack_as, pack_into, pack_native, unpack, unpack_as, unpack_native};
pub use endian::{BigEndian, ByteOrder, Endian, LittleEndian, NativeEndian, ParseByteOrderError};
pub use error::Error;
pub use scalar::Scalar;
pub use value::{ScalarKind, ScalarValue};

mod codec;
mod endian;
mod error;
mod scalar;
mod value;
