use pinocchio::{account_info::AccountInfo, ProgramResult};
use wardrobe_interface::{
    instructions::register_trait::RegisterTraitInstructionData,
    state::{
        registered_trait::{initialize_trait_account, TraitKind, TRAIT_ACCOUNT_SIZE},
        transmutable::load,
    },
};

use crate::{
    context::register_trait_context::RegisterTraitContext, debug,
    shared::create_account::create_program_account, trait_signer,
};

pub fn process_register_trait(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    // Safety: All bit patterns are valid.
    let args = unsafe { load::<RegisterTraitInstructionData>(instruction_data) }?;
    let kind = TraitKind::try_from(args.kind())?;

    let ctx = RegisterTraitContext::load(accounts)?;

    debug!("registering a trait mint");
    create_program_account(
        ctx.authority.info,
        ctx.trait_account.info,
        TRAIT_ACCOUNT_SIZE,
        trait_signer!(ctx.trait_mint.key(), args.bump()),
    )?;

    // Safety: Single mutable borrow of the freshly created account data.
    let data = unsafe { ctx.trait_account.info.borrow_mut_data_unchecked() };
    initialize_trait_account(data, ctx.trait_mint.key(), kind, args.bump())?;

    Ok(())
}
