use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::error::WardrobeError;

use crate::validation::{
    authority_info::AuthorityInfo, avatar_account_info::AvatarAccountInfo,
    token_account_info::TokenAccountInfo, token_program_info::TokenProgramInfo,
    trait_account_info::TraitAccountInfo,
};

/// The account context for the `EquipTrait` instruction, verifying avatar ownership, the trait's
/// registration, and possession of the trait token to be burned.
#[derive(Clone)]
pub struct EquipTraitContext<'a> {
    pub user: &'a AccountInfo,
    pub authority: AuthorityInfo<'a>,
    pub avatar_account: AvatarAccountInfo<'a>,
    pub avatar_mint: &'a AccountInfo,
    pub avatar_ata: TokenAccountInfo<'a>,
    pub trait_account: TraitAccountInfo<'a>,
    pub trait_mint: &'a AccountInfo,
    pub trait_ata: TokenAccountInfo<'a>,
    pub token_program: TokenProgramInfo<'a>,
}

impl<'a> EquipTraitContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<EquipTraitContext<'a>, ProgramError> {
        let [user, authority, avatar_account, avatar_mint, avatar_ata, trait_account, trait_mint, trait_ata, token_program] =
            accounts
        else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        let authority = AuthorityInfo::new(authority)?;
        let avatar_account = AvatarAccountInfo::new(avatar_account, avatar_mint.key())?;
        let trait_account = TraitAccountInfo::new(trait_account, trait_mint.key())?;

        // The user's signature is consumed by the burn; no explicit signer check is needed.
        let avatar_ata = TokenAccountInfo::new_holding_one(avatar_ata, avatar_mint.key(), user.key())?;
        let trait_ata = TokenAccountInfo::new_holding_one(trait_ata, trait_mint.key(), user.key())?;

        let token_program = TokenProgramInfo::new_legacy(token_program)?;

        Ok(Self {
            user,
            authority,
            avatar_account,
            avatar_mint,
            avatar_ata,
            trait_account,
            trait_mint,
            trait_ata,
            token_program,
        })
    }
}
