use crate::error::WardrobeError;

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast
/// (e.g., `&*(bytes.as_ptr() as *const Self)`).
///
/// # Safety
/// **Implementor guarantees:**
/// - A stable layout (`#[repr(C)]` or `#[repr(transparent)]`) where any `LEN` bytes form a valid
///   `Self`. Prefer `[u8; N]` fields and/or transparent byte wrappers.
/// - `size_of::<Self>() == LEN`
/// - `align_of::<Self>() == 1`
///
/// **Caller guarantees:**
/// - The bytes represent a valid `Self`.
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;
}

/// Returns a reference to a `T: Transmutable` from the given bytes after checking the byte length.
///
/// # Safety
/// - Caller must guarantee `bytes` is a valid representation of `T`.
#[inline(always)]
pub unsafe fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, WardrobeError> {
    if bytes.len() != T::LEN {
        return Err(WardrobeError::InsufficientByteLength);
    }
    Ok(&*(bytes.as_ptr() as *const T))
}

/// Returns a mutable reference to a `T: Transmutable` from the given bytes after checking the
/// byte length.
///
/// # Safety
/// - Caller must guarantee `bytes` is a valid representation of `T`.
#[inline(always)]
pub unsafe fn load_mut<T: Transmutable>(bytes: &mut [u8]) -> Result<&mut T, WardrobeError> {
    if bytes.len() != T::LEN {
        return Err(WardrobeError::InsufficientByteLength);
    }
    Ok(&mut *(bytes.as_ptr() as *mut T))
}
