use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::error::WardrobeError;

use crate::validation::{
    authority_info::AuthorityInfo, rank_account_info::RankAccountInfo,
    token_account_info::TokenAccountInfo, token_program_info::TokenProgramInfo,
};

/// The account context for the `RedeemBadge` instruction.
///
/// The badge mint is kept raw: the processor compares it against the mint of the asset named in
/// the instruction data.
#[derive(Clone)]
pub struct RedeemBadgeContext<'a> {
    pub user: &'a AccountInfo,
    pub authority: AuthorityInfo<'a>,
    pub avatar_mint: &'a AccountInfo,
    pub avatar_ata: TokenAccountInfo<'a>,
    pub badge_mint: &'a AccountInfo,
    pub badge_ata: TokenAccountInfo<'a>,
    pub rank_account: RankAccountInfo<'a>,
    pub token_program: TokenProgramInfo<'a>,
}

impl<'a> RedeemBadgeContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<RedeemBadgeContext<'a>, ProgramError> {
        let [user, authority, avatar_mint, avatar_ata, badge_mint, badge_ata, rank_account, token_program] =
            accounts
        else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        let authority = AuthorityInfo::new(authority)?;
        let avatar_ata = TokenAccountInfo::new_holding_one(avatar_ata, avatar_mint.key(), user.key())?;

        // The badge balance itself is checked by the burn; the user's signature is consumed there
        // too.
        let badge_ata = TokenAccountInfo::new(badge_ata, badge_mint.key(), user.key())?;

        let rank_account = RankAccountInfo::new(rank_account, avatar_mint.key())?;
        let token_program = TokenProgramInfo::new_legacy(token_program)?;

        Ok(Self {
            user,
            authority,
            avatar_mint,
            avatar_ata,
            badge_mint,
            badge_ata,
            rank_account,
            token_program,
        })
    }
}
