use pinocchio::{account_info::AccountInfo, ProgramResult};
use wardrobe_interface::state::{avatar::AvatarAccount, transmutable::load_mut};

use crate::{
    context::equip_trait_context::EquipTraitContext, debug,
    shared::token_utils::collectible_transfers::burn_one,
};

pub fn process_equip_trait(accounts: &[AccountInfo], _instruction_data: &[u8]) -> ProgramResult {
    let ctx = EquipTraitContext::load(accounts)?;

    let kind = ctx.trait_account.kind()?;

    // Fill the slot before burning so a taken slot fails without touching the token.
    {
        // Safety: Single mutable borrow of the avatar account data, released before the burn.
        let data = unsafe { ctx.avatar_account.info.borrow_mut_data_unchecked() };
        let avatar = unsafe { load_mut::<AvatarAccount>(data) }?;
        avatar.fill_slot(kind)?;
    }

    debug!("burning the equipped trait token");
    burn_one(ctx.trait_ata.info, ctx.trait_mint, ctx.user)?;

    Ok(())
}
