use pinocchio::program_error::ProgramError;

use crate::error::WardrobeError;

pub mod alias;
pub mod equip_trait;
pub mod initialize_avatar;
pub mod initialize_supply;
pub mod mint_badge;
pub mod mint_id_card;
pub mod redeem_badge;
pub mod register_trait;
pub mod rename_avatar;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum InstructionTag {
    InitializeAvatar,
    RegisterTrait,
    EquipTrait,
    MintIdCard,
    MintBadge,
    RedeemBadge,
    RenameAvatar,
    InitializeSupply,
}

impl TryFrom<u8> for InstructionTag {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive instruction tag test.
            0..8 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(WardrobeError::InvalidInstructionTag.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::InstructionTag;

    #[test]
    fn test_instruction_tag_from_u8_exhaustive() {
        for variant in InstructionTag::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                InstructionTag::from_repr(variant_u8).unwrap(),
                InstructionTag::try_from(variant_u8).unwrap(),
            );
            assert_eq!(InstructionTag::try_from(variant_u8).unwrap(), variant);
        }
        assert!(InstructionTag::try_from(8).is_err());
    }
}
