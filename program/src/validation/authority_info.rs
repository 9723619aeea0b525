use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq};
use wardrobe_interface::{constants::AUTHORITY, error::WardrobeError};

/// The wardrobe authority wallet, required to have signed.
///
/// The signer check is explicit because no downstream CPI consumes the authority's signature.
#[derive(Clone)]
pub struct AuthorityInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> AuthorityInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<AuthorityInfo<'a>, WardrobeError> {
        if !pubkey_eq(info.key(), &AUTHORITY) {
            return Err(WardrobeError::InvalidAuthority);
        }

        if !info.is_signer() {
            return Err(WardrobeError::MissingAuthoritySignature);
        }

        Ok(Self { info })
    }
}
