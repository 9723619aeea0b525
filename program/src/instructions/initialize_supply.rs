use pinocchio::{account_info::AccountInfo, ProgramResult};
use wardrobe_interface::{
    instructions::initialize_supply::SupplyMaximaInstructionData,
    state::{
        supply::{initialize_supply_account, SUPPLY_ACCOUNT_SIZE},
        transmutable::load,
    },
};

use crate::{
    context::initialize_supply_context::InitializeSupplyContext, debug,
    shared::create_account::create_program_account, supply_signer,
};

pub fn process_initialize_supply(
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Safety: All bit patterns are valid.
    let args = unsafe { load::<SupplyMaximaInstructionData>(instruction_data) }?;

    let ctx = InitializeSupplyContext::load(accounts)?;

    debug!("creating the badge supply account");
    create_program_account(
        ctx.authority.info,
        ctx.supply_account.info,
        SUPPLY_ACCOUNT_SIZE,
        supply_signer!(args.bump()),
    )?;

    // Safety: Single mutable borrow of the freshly created account data.
    let data = unsafe { ctx.supply_account.info.borrow_mut_data_unchecked() };
    initialize_supply_account(data, args.maxima(), args.bump())?;

    Ok(())
}
