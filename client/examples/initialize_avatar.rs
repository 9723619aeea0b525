//! Creates a supply-1 avatar mint on a local test cluster, initializes its avatar account, and
//! prints the resulting transaction signature.

use client::{
    context::{avatar::AvatarContext, token::TokenContext},
    transactions::{fund_account, local_rpc_client, send_transaction},
    SPL_TOKEN_ID,
};
use solana_sdk::{
    program_pack::Pack,
    rent::Rent,
    signature::{Keypair, Signer},
};
use solana_system_interface::instruction as system_instruction;
use spl_token_interface::{instruction::initialize_mint2, state::Mint};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rpc = local_rpc_client();
    let payer = fund_account(&rpc, None).await?;
    let user = payer.pubkey();

    // Create a supply-1 avatar mint fully held by the user.
    let avatar_mint = Keypair::new();
    let token = TokenContext::new(Some(user), avatar_mint.pubkey(), SPL_TOKEN_ID, 0);
    send_transaction(
        &rpc,
        &payer,
        &[&avatar_mint],
        &[
            system_instruction::create_account(
                &user,
                &avatar_mint.pubkey(),
                Rent::default().minimum_balance(Mint::LEN),
                Mint::LEN as u64,
                &SPL_TOKEN_ID,
            ),
            initialize_mint2(&SPL_TOKEN_ID, &avatar_mint.pubkey(), &user, None, 0)?,
            token.create_ata(&user, &user),
        ],
    )
    .await?;
    send_transaction(&rpc, &payer, &[], &[token.mint_to_owner(&user, 1)?]).await?;

    // Initialize the avatar account.
    let avatar = AvatarContext::new(user, avatar_mint.pubkey());
    let signature = send_transaction(&rpc, &payer, &[], &[avatar.initialize_avatar()]).await?;

    println!("Transaction signature: {signature}");

    Ok(())
}
