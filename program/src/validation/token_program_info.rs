use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq};
use wardrobe_interface::error::WardrobeError;

#[derive(Clone)]
pub struct TokenProgramInfo<'a> {
    pub info: &'a AccountInfo,
    /// To avoid pubkey comparisons later, store whether or not this is the base or 2022 program.
    pub is_spl_token: bool,
}

impl<'a> TokenProgramInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<TokenProgramInfo<'a>, WardrobeError> {
        let is_spl_token = pubkey_eq(info.key(), &pinocchio_token::ID);

        if !is_spl_token && !pubkey_eq(info.key(), &pinocchio_token_2022::ID) {
            return Err(WardrobeError::InvalidTokenProgram);
        }

        Ok(Self { info, is_spl_token })
    }

    /// Accepts only the original spl token program. Collectible, avatar, and trait mints are
    /// plain spl token mints; only the credit mint may live on token-2022.
    #[inline(always)]
    pub fn new_legacy(info: &'a AccountInfo) -> Result<TokenProgramInfo<'a>, WardrobeError> {
        if !pubkey_eq(info.key(), &pinocchio_token::ID) {
            return Err(WardrobeError::InvalidTokenProgram);
        }

        Ok(Self {
            info,
            is_spl_token: true,
        })
    }
}
