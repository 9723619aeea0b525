use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq, ProgramResult};
use wardrobe_interface::{error::WardrobeError, state::collectible::Collectible};

use crate::{
    context::mint_collectible_context::MintCollectibleContext,
    debug,
    shared::token_utils::{collect_payment::collect_payment, collectible_transfers::mint_collectible},
};

pub fn process_mint_id_card(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let [treasury_bump] = instruction_data else {
        return Err(WardrobeError::InsufficientByteLength.into());
    };

    let ctx = MintCollectibleContext::load(accounts)?;

    let asset = Collectible::IdCard;
    if !pubkey_eq(ctx.collectible_mint.key(), asset.mint()) {
        return Err(WardrobeError::InvalidCollectibleMint.into());
    }

    debug!("minting an id card");
    mint_collectible(&ctx, *treasury_bump)?;

    collect_payment(&ctx, asset.price())?;

    Ok(())
}
