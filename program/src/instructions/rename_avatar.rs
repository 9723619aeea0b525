use pinocchio::{account_info::AccountInfo, ProgramResult};
use wardrobe_interface::{
    instructions::alias::AliasInstructionData,
    state::{avatar::AvatarAccount, transmutable::{load, load_mut}},
};

use crate::{
    context::rename_avatar_context::RenameAvatarContext, debug,
    shared::token_utils::collectible_transfers::burn_one,
};

pub fn process_rename_avatar(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    // Safety: All bit patterns are valid; the length byte is validated below.
    let args = unsafe { load::<AliasInstructionData>(instruction_data) }?;
    let alias = args.alias()?;

    let ctx = RenameAvatarContext::load(accounts)?;

    // Write the alias before burning so an invalid rename fails without consuming the ID card.
    {
        // Safety: Single mutable borrow of the avatar account data, released before the burn.
        let data = unsafe { ctx.avatar_account.info.borrow_mut_data_unchecked() };
        let avatar = unsafe { load_mut::<AvatarAccount>(data) }?;
        avatar.set_alias(alias)?;
    }

    debug!("burning the id card rename fee");
    burn_one(ctx.id_card_ata.info, ctx.id_card_mint.info, ctx.user)?;

    Ok(())
}
