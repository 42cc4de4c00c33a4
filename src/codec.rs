use crate::endian::Endian;
use crate::{ByteOrder, Error, Scalar};

/// Reverses `bytes` unless `order` is the native byte order
///
/// Both layouts are derived from the native one here, so they are always exact reverses of each other.
#[inline(always)]
fn reorder(bytes: &mut [u8], order: ByteOrder) {
    if !order.is_native() {
        bytes.reverse();
    }
}

#[inline(always)]
fn check_len<T: Scalar>(got: usize) -> Result<(), Error> {
    if got != T::WIDTH {
        let kind = T::KIND;
        tracing::debug!(%kind, expected = T::WIDTH, got, "byte length mismatch");

        return Err(Error::LengthMismatch {
            expected: T::WIDTH,
            got,
        });
    }

    Ok(())
}

/// Pack `value` into its [`Scalar::WIDTH`] bytes using the given byte order
///
/// ```
/// use byte_backpack::{pack, ByteOrder};
///
/// assert_eq!(pack(1.0f64, ByteOrder::BigEndian), [63, 240, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(pack(0x1234u16, ByteOrder::LittleEndian), [0x34, 0x12]);
/// ```
#[inline]
pub fn pack<T: Scalar>(value: T, order: ByteOrder) -> T::Bytes {
    let mut bytes = value.to_native_bytes();
    reorder(bytes.as_mut(), order);
    bytes
}

/// [`pack`] using [`ByteOrder::NATIVE`]
#[inline]
pub fn pack_native<T: Scalar>(value: T) -> T::Bytes {
    pack(value, ByteOrder::NATIVE)
}

/// [`pack`] with the byte order chosen at compile time
///
/// ```
/// use byte_backpack::{pack_as, BigEndian};
///
/// assert_eq!(pack_as::<BigEndian, _>(-1i32), [255, 255, 255, 255]);
/// ```
#[inline]
pub fn pack_as<E: Endian, T: Scalar>(value: T) -> T::Bytes {
    pack(value, E::ORDER)
}

/// Pack `value` into `dst`, which must be exactly [`Scalar::WIDTH`] bytes long
///
/// `dst` is left untouched when its length doesn't match.
pub fn pack_into<T: Scalar>(value: T, order: ByteOrder, dst: &mut [u8]) -> Result<(), Error> {
    check_len::<T>(dst.len())?;

    dst.copy_from_slice(pack(value, order).as_ref());

    Ok(())
}

/// Unpack a `T` from `bytes` using the given byte order
///
/// Fails with [`Error::LengthMismatch`] if `bytes` isn't exactly [`Scalar::WIDTH`] bytes long.
/// The content of `bytes` is not validated, every bit pattern maps to a value.
///
/// ```
/// use byte_backpack::{unpack, ByteOrder, Error};
///
/// let v: f64 = unpack(&[0, 0, 0, 0, 0, 0, 240, 63], ByteOrder::LittleEndian)?;
/// assert_eq!(v, 1.0);
///
/// assert_eq!(
///     unpack::<u32>(&[1, 2], ByteOrder::BigEndian),
///     Err(Error::LengthMismatch { expected: 4, got: 2 })
/// );
/// # Ok::<(), Error>(())
/// ```
#[inline]
pub fn unpack<T: Scalar>(bytes: &[u8], order: ByteOrder) -> Result<T, Error> {
    check_len::<T>(bytes.len())?;

    let mut native = T::Bytes::default();
    native.as_mut().copy_from_slice(bytes);
    reorder(native.as_mut(), order);

    Ok(T::from_native_bytes(native))
}

/// [`unpack`] using [`ByteOrder::NATIVE`]
#[inline]
pub fn unpack_native<T: Scalar>(bytes: &[u8]) -> Result<T, Error> {
    unpack(bytes, ByteOrder::NATIVE)
}

/// [`unpack`] with the byte order chosen at compile time
#[inline]
pub fn unpack_as<E: Endian, T: Scalar>(bytes: &[u8]) -> Result<T, Error> {
    unpack(bytes, E::ORDER)
}
