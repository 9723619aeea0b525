use pinocchio::{account_info::AccountInfo, ProgramResult};

use crate::{context::mint_collectible_context::MintCollectibleContext, treasury_signer};

/// Mints one collectible to the user's associated token account, creating the account if needed.
///
/// The treasury PDA signs as the mint authority. If the passed treasury account isn't the
/// derivation the seeds sign for (and the mint's configured authority), the token program rejects
/// the mint, so no address check is needed beforehand.
pub fn mint_collectible(ctx: &MintCollectibleContext, treasury_bump: u8) -> ProgramResult {
    pinocchio_associated_token_account::instructions::CreateIdempotent {
        funding_account: ctx.user,
        account: ctx.collectible_ata,
        wallet: ctx.user,
        mint: ctx.collectible_mint,
        system_program: ctx.system_program.info,
        token_program: ctx.token_program.info,
    }
    .invoke()?;

    pinocchio_token::instructions::MintTo {
        mint: ctx.collectible_mint,
        account: ctx.collectible_ata,
        mint_authority: ctx.treasury,
        amount: 1,
    }
    .invoke_signed(&[treasury_signer!(treasury_bump)])
}

/// Burns one token from `token_account`, authorized by `owner`.
///
/// Used for consuming trait tokens on equip, badges on redemption, and ID cards on rename.
pub fn burn_one(
    token_account: &AccountInfo,
    mint: &AccountInfo,
    owner: &AccountInfo,
) -> ProgramResult {
    pinocchio_token::instructions::Burn {
        account: token_account,
        mint,
        authority: owner,
        amount: 1,
    }
    .invoke()
}
