use pinocchio::{account_info::AccountInfo, pubkey::pubkey_eq, ProgramResult};
use wardrobe_interface::{
    error::WardrobeError,
    instructions::mint_badge::MintBadgeInstructionData,
    state::{
        collectible::Collectible,
        rank::{initialize_rank_account, RankAccount, RANK_ACCOUNT_SIZE},
        supply::SupplyAccount,
        transmutable::{load, load_mut},
    },
};

use crate::{
    context::mint_badge_context::MintBadgeContext,
    debug, rank_signer,
    shared::{
        create_account::create_program_account,
        token_utils::{collect_payment::collect_payment, collectible_transfers::mint_collectible},
    },
    validation::rank_account_info::RankAccountInfo,
};

pub fn process_mint_badge(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    // Safety: All bit patterns are valid.
    let args = unsafe { load::<MintBadgeInstructionData>(instruction_data) }?;

    let asset = Collectible::try_from(args.asset())?;
    let tier = asset.badge_tier().ok_or(WardrobeError::NotABadge)?;

    let ctx = MintBadgeContext::load(accounts)?;

    if !pubkey_eq(ctx.base.collectible_mint.key(), asset.mint()) {
        return Err(WardrobeError::InvalidCollectibleMint.into());
    }

    // The rank PDA is created lazily on the avatar's first badge mint.
    if ctx.rank_account.data_is_empty() {
        debug!("creating the rank account");
        create_program_account(
            ctx.base.user,
            ctx.rank_account,
            RANK_ACCOUNT_SIZE,
            rank_signer!(ctx.avatar_mint.key(), args.rank_bump()),
        )?;

        // Safety: Single mutable borrow of the freshly created account data.
        let data = unsafe { ctx.rank_account.borrow_mut_data_unchecked() };
        initialize_rank_account(data, ctx.avatar_mint.key(), args.rank_bump())?;
    }
    let rank_account = RankAccountInfo::new(ctx.rank_account, ctx.avatar_mint.key())?;

    // Gate on rank order before any token movement.
    {
        // Safety: Single immutable borrow of the rank account data, released below.
        let data = unsafe { rank_account.info.borrow_data_unchecked() };
        let rank = unsafe { load::<RankAccount>(data) }?;
        rank.check_mint_allowed(tier)?;
    }

    // Count the mint against the tier's supply cap.
    {
        // Safety: Single mutable borrow of the supply account data, released below.
        let data = unsafe { ctx.supply_account.info.borrow_mut_data_unchecked() };
        let supply = unsafe { load_mut::<SupplyAccount>(data) }?;
        supply.increment(tier)?;
    }

    debug!("minting a badge");
    mint_collectible(&ctx.base, args.treasury_bump())?;

    collect_payment(&ctx.base, asset.price())?;

    // Safety: Single mutable borrow of the rank account data.
    let data = unsafe { rank_account.info.borrow_mut_data_unchecked() };
    let rank = unsafe { load_mut::<RankAccount>(data) }?;
    rank.record_mint(tier);

    Ok(())
}
