use pinocchio::{
    account_info::AccountInfo,
    pubkey::{pubkey_eq, Pubkey},
};

#[inline(always)]
pub fn owned_by(info: &AccountInfo, potential_owner: &Pubkey) -> bool {
    pubkey_eq(info.owner(), potential_owner)
}

/// Checks if an account is owned by the `spl_token::ID`; i.e., not `spl_token_2022::ID`.
///
/// This alone isn't proof of a valid, initialized token account; the account data still has to be
/// checked, directly or by invoking the token program with the account.
#[inline(always)]
pub fn is_owned_by_spl_token(info: &AccountInfo) -> bool {
    owned_by(info, &pinocchio_token::ID)
}
