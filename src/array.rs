//! Compile-time lengths of fixed-size arrays.

/// Return the number of elements in a fixed-size array.
///
/// The length is a compile-time constant and can be used wherever Rust
/// requires one, such as the bound of another array:
///
/// ```
/// use vox_base::array::array_len;
///
/// let primes = [2, 3, 5, 7];
/// assert_eq!(array_len(&primes), 4);
///
/// const LEN: usize = array_len(&[0u8; 3]);
/// let zeros = [0u8; LEN];
/// assert_eq!(zeros.len(), 3);
/// ```
///
/// Only genuine `[T; N]` arrays are accepted. Slices and containers whose
/// length is not part of the type fail to compile rather than producing a
/// wrong count:
///
/// ```compile_fail
/// use vox_base::array::array_len;
///
/// let values = vec![1, 2, 3];
/// array_len(&values);
/// ```
#[inline]
pub const fn array_len<T, const N: usize>(_array: &[T; N]) -> usize {
    N
}
