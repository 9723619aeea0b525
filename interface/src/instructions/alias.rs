use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    constants::MAX_ALIAS_LEN,
    error::WardrobeError,
    pack::{write_bytes, Pack},
    state::transmutable::Transmutable,
};

/// The wire form of an avatar alias: a length byte followed by a fixed-size byte array.
///
/// A fixed layout keeps the instruction data transmutable; the length byte is validated when the
/// alias is applied.
#[repr(C)]
pub struct AliasInstructionData {
    alias_len: u8,
    alias: [u8; MAX_ALIAS_LEN],
}

impl AliasInstructionData {
    /// Builds the wire form of `alias`, failing client-side if it's longer than
    /// [`MAX_ALIAS_LEN`].
    pub fn new(alias: &[u8]) -> Result<Self, WardrobeError> {
        if alias.len() > MAX_ALIAS_LEN {
            return Err(WardrobeError::AliasTooLong);
        }
        let mut bytes = [0u8; MAX_ALIAS_LEN];
        bytes[..alias.len()].copy_from_slice(alias);
        Ok(AliasInstructionData {
            alias_len: alias.len() as u8,
            alias: bytes,
        })
    }

    /// The alias bytes, if the length byte is in bounds.
    pub fn alias(&self) -> Result<&[u8], WardrobeError> {
        if self.alias_len as usize > MAX_ALIAS_LEN {
            return Err(WardrobeError::AliasTooLong);
        }
        Ok(&self.alias[..self.alias_len as usize])
    }
}

unsafe impl Pack<33> for AliasInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 33]) {
        write_bytes(&mut dst[0..1], &[self.alias_len]);
        write_bytes(&mut dst[1..33], &self.alias);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: the length byte is validated on access.
unsafe impl Transmutable for AliasInstructionData {
    const LEN: usize = 1 + MAX_ALIAS_LEN;
}

const_assert_eq!(AliasInstructionData::LEN, size_of::<AliasInstructionData>());
const_assert_eq!(1, align_of::<AliasInstructionData>());

#[cfg(test)]
mod tests {
    use crate::state::transmutable::load;

    use super::*;

    #[test]
    fn pack_then_load_roundtrip() {
        let data = AliasInstructionData::new(b"northpaw").unwrap();
        let packed = data.pack();
        assert_eq!(packed[0], 8);
        assert_eq!(&packed[1..9], b"northpaw");
        assert!(packed[9..].iter().all(|b| *b == 0));

        // Safety: all bit patterns are valid.
        let loaded = unsafe { load::<AliasInstructionData>(&packed) }.unwrap();
        assert_eq!(loaded.alias().unwrap(), b"northpaw");
    }

    #[test]
    fn oversized_aliases_are_rejected() {
        assert!(AliasInstructionData::new(&[0u8; MAX_ALIAS_LEN + 1]).is_err());

        // A hostile length byte is caught on access.
        let mut packed = AliasInstructionData::new(b"ok").unwrap().pack();
        packed[0] = MAX_ALIAS_LEN as u8 + 1;
        let loaded = unsafe { load::<AliasInstructionData>(&packed) }.unwrap();
        assert_eq!(loaded.alias(), Err(WardrobeError::AliasTooLong));
    }
}
