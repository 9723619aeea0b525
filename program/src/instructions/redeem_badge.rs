use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq, ProgramResult};
use wardrobe_interface::{
    error::WardrobeError,
    state::{collectible::Collectible, rank::RankAccount, transmutable::load_mut},
};

use crate::{
    context::redeem_badge_context::RedeemBadgeContext, debug,
    shared::token_utils::collectible_transfers::burn_one,
};

pub fn process_redeem_badge(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let [asset_id] = instruction_data else {
        return Err(WardrobeError::InsufficientByteLength.into());
    };

    let asset = Collectible::try_from(*asset_id)?;
    let tier = asset.badge_tier().ok_or(WardrobeError::NotABadge)?;

    let ctx = RedeemBadgeContext::load(accounts)?;

    if !pubkey_eq(ctx.badge_mint.key(), asset.mint()) {
        return Err(WardrobeError::InvalidCollectibleMint.into());
    }

    // Raise the rank before burning so an out-of-order redemption fails without touching the
    // token.
    {
        // Safety: Single mutable borrow of the rank account data, released before the burn.
        let data = unsafe { ctx.rank_account.info.borrow_mut_data_unchecked() };
        let rank = unsafe { load_mut::<RankAccount>(data) }?;
        rank.redeem(tier)?;
    }

    debug!("burning the redeemed badge");
    burn_one(ctx.badge_ata.info, ctx.badge_mint, ctx.user)?;

    Ok(())
}
