//! Deterministic byte encodings for values fed to the filter.
//!
//! Integers are encoded little-endian at their fixed width (4 bytes for
//! `u32`, 8 for `u64`); text is its UTF-8 bytes; byte slices pass through.
//! A value must be queried with the same encoding it was inserted with, so
//! `42u32` and `42u64` are different elements.

/// A value with a canonical byte encoding.
///
/// The encoding is handed to a closure so fixed-width integers can be
/// encoded on the stack.
///
/// # Examples
///
/// ```
/// use bloomlite::hash::encode::Element;
///
/// 0x0102_0304u32.with_bytes(|b| assert_eq!(b, &[4u8, 3, 2, 1]));
/// "hi".with_bytes(|b| assert_eq!(b, b"hi"));
/// ```
pub trait Element {
    /// Call `f` with the encoded bytes of `self`.
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R;
}

impl Element for [u8] {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self)
    }
}

impl<const N: usize> Element for [u8; N] {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self)
    }
}

impl Element for Vec<u8> {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self)
    }
}

impl Element for str {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_bytes())
    }
}

impl Element for String {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_bytes())
    }
}

impl Element for u32 {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.to_le_bytes())
    }
}

impl Element for u64 {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.to_le_bytes())
    }
}

impl<T: Element + ?Sized> Element for &T {
    #[inline]
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        (**self).with_bytes(f)
    }
}
