use pinocchio::{account_info::AccountInfo, ProgramResult};
use wardrobe_interface::{
    error::WardrobeError,
    state::avatar::{initialize_avatar_account, AVATAR_ACCOUNT_SIZE},
};

use crate::{
    avatar_signer, context::initialize_avatar_context::InitializeAvatarContext, debug,
    shared::create_account::create_program_account,
};

pub fn process_initialize_avatar(
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let [bump] = instruction_data else {
        return Err(WardrobeError::InsufficientByteLength.into());
    };

    let ctx = InitializeAvatarContext::load(accounts)?;

    debug!("creating the avatar account");
    create_program_account(
        ctx.user,
        ctx.avatar_account.info,
        AVATAR_ACCOUNT_SIZE,
        avatar_signer!(ctx.avatar_mint.key(), *bump),
    )?;

    // Safety: Single mutable borrow of the freshly created account data.
    let data = unsafe { ctx.avatar_account.info.borrow_mut_data_unchecked() };
    initialize_avatar_account(data, ctx.avatar_mint.key(), *bump)?;

    Ok(())
}
