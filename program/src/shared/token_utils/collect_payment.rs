use pinocchio::{program_error::ProgramError, ProgramResult};
use wardrobe_interface::error::WardrobeError;

use crate::context::mint_collectible_context::MintCollectibleContext;

/// Transfers `amount` credit tokens from the user to the treasury credit account and returns the
/// amount the treasury actually received.
pub fn transfer_credits(
    ctx: &MintCollectibleContext,
    amount: u64,
) -> Result<u64, ProgramError> {
    if ctx.credit_token_program.is_spl_token {
        pinocchio_token::instructions::Transfer {
            from: ctx.user_credit_ata.info,
            to: ctx.treasury_credit_ata.info,
            authority: ctx.user,
            amount,
        }
        .invoke()?;
        // `spl_token` always transfers the exact amount passed in.
        Ok(amount)
    } else {
        let decimals = ctx.credit_mint.get_mint_decimals()?;

        let balance_before = ctx.treasury_credit_ata.get_balance()?;

        pinocchio_token_2022::instructions::TransferChecked {
            from: ctx.user_credit_ata.info,
            to: ctx.treasury_credit_ata.info,
            mint: ctx.credit_mint.info,
            authority: ctx.user,
            decimals,
            amount,
            token_program: ctx.credit_token_program.info.key(),
        }
        .invoke()?;
        let balance_after = ctx.treasury_credit_ata.get_balance()?;
        // `spl_token_2022` amount received must be checked due to transfer hooks, fees, and other
        // extensions that may intercept a simple transfer and alter the amount transferred.
        let received = balance_after
            .checked_sub(balance_before)
            .ok_or(ProgramError::InvalidArgument)?;
        Ok(received)
    }
}

/// Collects the full `price` in credit tokens, failing if the treasury received anything less
/// (or more) than the price.
pub fn collect_payment(ctx: &MintCollectibleContext, price: u64) -> ProgramResult {
    let received = transfer_credits(ctx, price)?;

    if received != price {
        return Err(WardrobeError::PaymentAmountMismatch.into());
    }

    Ok(())
}
