//! Transaction submission helpers against a live RPC endpoint.

use anyhow::Context;
use solana_client::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::logs::{log_info, log_success};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

/// Creates an [`RpcClient`] against the local test cluster with confirmed commitment.
pub fn local_rpc_client() -> RpcClient {
    RpcClient::new_with_commitment(DEFAULT_RPC_URL.to_string(), CommitmentConfig::confirmed())
}

/// Airdrops [`DEFAULT_FUND_AMOUNT`] lamports to the passed keypair, or to a fresh one if `None`,
/// and waits for the airdrop to confirm.
pub async fn fund_account(rpc: &RpcClient, keypair: Option<Keypair>) -> anyhow::Result<Keypair> {
    let payer = match keypair {
        Some(kp) => kp,
        None => Keypair::new(),
    };

    let airdrop_signature = rpc
        .request_airdrop(&payer.pubkey(), DEFAULT_FUND_AMOUNT)
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .context("Couldn't confirm transaction")?
        && i < 10
    {
        std::thread::sleep(std::time::Duration::from_millis(500));
        i += 1;
    }

    log_info("fund_account", format!("funded {}", payer.pubkey()));
    Ok(payer)
}

pub struct SendTransactionConfig {
    /// An optional compute unit limit prepended to the transaction.
    pub compute_budget: Option<u32>,
}

pub async fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    send_transaction_with_config(rpc, payer, signers, instructions, None).await
}

pub async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    config: Option<SendTransactionConfig>,
) -> anyhow::Result<Signature> {
    let mut all_instructions = Vec::with_capacity(instructions.len() + 1);
    if let Some(SendTransactionConfig {
        compute_budget: Some(units),
    }) = config
    {
        all_instructions.push(ComputeBudgetInstruction::set_compute_unit_limit(units));
    }
    all_instructions.extend_from_slice(instructions);

    let message = Message::new(&all_instructions, Some(&payer.pubkey()));

    let mut all_signers = vec![payer];
    all_signers.extend_from_slice(signers);

    let blockhash = rpc
        .get_latest_blockhash()
        .context("Failed to fetch a recent blockhash")?;
    let transaction = Transaction::new(&all_signers, message, blockhash);

    let signature = rpc
        .send_and_confirm_transaction(&transaction)
        .context("Failed to send and confirm transaction")?;

    log_success("send_transaction", signature);
    Ok(signature)
}
