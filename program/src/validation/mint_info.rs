use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{pubkey_eq, Pubkey},
};
use pinocchio_token_interface::state::{load_unchecked as pinocchio_load_unchecked, mint::Mint};
use wardrobe_interface::{constants::CREDIT_MINT, error::WardrobeError};

#[derive(Clone)]
pub struct MintInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> MintInfo<'a> {
    /// Checks that the account is the expected collectible mint.
    #[inline(always)]
    pub fn new_collectible(
        info: &'a AccountInfo,
        expected: &Pubkey,
    ) -> Result<MintInfo<'a>, WardrobeError> {
        if !pubkey_eq(info.key(), expected) {
            return Err(WardrobeError::InvalidCollectibleMint);
        }

        Ok(Self { info })
    }

    /// Checks that the account is the credit token mint.
    #[inline(always)]
    pub fn new_credit(info: &'a AccountInfo) -> Result<MintInfo<'a>, WardrobeError> {
        if !pubkey_eq(info.key(), &CREDIT_MINT) {
            return Err(WardrobeError::InvalidCreditMint);
        }

        Ok(Self { info })
    }

    /// Safely borrows the mint account's data to get the mint decimals.
    pub fn get_mint_decimals(&self) -> Result<u8, ProgramError> {
        let data = &self.info.try_borrow_data()?;
        // Safety: Both constructors pin the address to a known deployed mint, so the account data
        // is a valid initialized mint.
        Ok(unsafe { pinocchio_load_unchecked::<Mint>(data) }?.decimals)
    }
}
