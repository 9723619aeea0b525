use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::{error::WardrobeError, state::collectible::Collectible};

use crate::validation::{
    authority_info::AuthorityInfo, avatar_account_info::AvatarAccountInfo, mint_info::MintInfo,
    token_account_info::TokenAccountInfo, token_program_info::TokenProgramInfo,
};

/// The account context for the `RenameAvatar` instruction: avatar ownership plus the ID card to
/// be burned as the rename fee.
#[derive(Clone)]
pub struct RenameAvatarContext<'a> {
    pub user: &'a AccountInfo,
    pub authority: AuthorityInfo<'a>,
    pub avatar_account: AvatarAccountInfo<'a>,
    pub avatar_mint: &'a AccountInfo,
    pub avatar_ata: TokenAccountInfo<'a>,
    pub id_card_mint: MintInfo<'a>,
    pub id_card_ata: TokenAccountInfo<'a>,
    pub token_program: TokenProgramInfo<'a>,
}

impl<'a> RenameAvatarContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<RenameAvatarContext<'a>, ProgramError> {
        let [user, authority, avatar_account, avatar_mint, avatar_ata, id_card_mint, id_card_ata, token_program] =
            accounts
        else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        let authority = AuthorityInfo::new(authority)?;
        let avatar_account = AvatarAccountInfo::new(avatar_account, avatar_mint.key())?;
        let avatar_ata = TokenAccountInfo::new_holding_one(avatar_ata, avatar_mint.key(), user.key())?;

        let id_card_mint = MintInfo::new_collectible(id_card_mint, Collectible::IdCard.mint())?;
        // The ID card balance is checked by the burn, which also consumes the user's signature.
        let id_card_ata = TokenAccountInfo::new(id_card_ata, id_card_mint.info.key(), user.key())?;

        let token_program = TokenProgramInfo::new_legacy(token_program)?;

        Ok(Self {
            user,
            authority,
            avatar_account,
            avatar_mint,
            avatar_ata,
            id_card_mint,
            id_card_ata,
            token_program,
        })
    }
}
