use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};

/// Creates a rent-exempt, program-owned account of `space` bytes at the PDA `signer` signs for,
/// funded by `payer`.
///
/// The target address doesn't need to be checked against a derivation: the system program rejects
/// the creation unless `target` is exactly the address the seeds sign for.
pub fn create_program_account(
    payer: &AccountInfo,
    target: &AccountInfo,
    space: usize,
    signer: Signer,
) -> ProgramResult {
    let lamports_required = Rent::get()?.minimum_balance(space);

    pinocchio_system::instructions::CreateAccount {
        from: payer,
        to: target,
        lamports: lamports_required,
        space: space as u64,
        owner: &crate::ID,
    }
    .invoke_signed(&[signer])
}
