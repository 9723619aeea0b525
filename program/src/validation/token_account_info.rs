use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{pubkey_eq, Pubkey},
};
use pinocchio_token_interface::state::{
    account::Account, load as pinocchio_load, load_unchecked as pinocchio_load_unchecked,
};
use wardrobe_interface::{error::WardrobeError, utils::owned_by};

#[derive(Clone)]
pub struct TokenAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> TokenAccountInfo<'a> {
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        expected_mint: &Pubkey,
        expected_owner: &Pubkey,
    ) -> Result<TokenAccountInfo<'a>, ProgramError> {
        if !owned_by(info, &pinocchio_token::ID) && !owned_by(info, &pinocchio_token_2022::ID) {
            return Err(WardrobeError::OwnerNotTokenProgram.into());
        }

        let account_data = &info.try_borrow_data()?;

        // Note the load below also checks that the account has been initialized.
        // Safety: The account owner has been verified, so the account data is valid.
        let token_account = unsafe { pinocchio_load::<Account>(account_data) }?;

        if !pubkey_eq(&token_account.mint, expected_mint) {
            return Err(WardrobeError::MintMismatch.into());
        }
        if !pubkey_eq(&token_account.owner, expected_owner) {
            return Err(WardrobeError::IncorrectTokenAccountOwner.into());
        }

        Ok(Self { info })
    }

    /// Like [`Self::new`], but additionally requires the account to hold exactly one token.
    ///
    /// This is the ownership proof for supply-1 mints: holding the single token of an avatar or
    /// trait mint is holding the NFT.
    #[inline(always)]
    pub fn new_holding_one(
        info: &'a AccountInfo,
        expected_mint: &Pubkey,
        expected_owner: &Pubkey,
    ) -> Result<TokenAccountInfo<'a>, ProgramError> {
        let token_account = Self::new(info, expected_mint, expected_owner)?;

        if token_account.get_balance()? != 1 {
            return Err(WardrobeError::TokenAmountIsNotOne.into());
        }

        Ok(token_account)
    }

    /// Wraps a token account whose address has already been pinned to a known constant.
    ///
    /// The caller guarantees the address comparison happened; no data is inspected here.
    #[inline(always)]
    pub fn new_unchecked(info: &'a AccountInfo) -> TokenAccountInfo<'a> {
        Self { info }
    }

    #[inline(always)]
    pub fn get_balance(&self) -> Result<u64, ProgramError> {
        let data = &self.info.try_borrow_data()?;
        // Safety: Account is verified as initialized and owned by one of the spl token programs
        // upon construction of Self.
        Ok(unsafe { pinocchio_load_unchecked::<Account>(data) }?.amount())
    }
}
