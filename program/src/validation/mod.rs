pub mod authority_info;
pub mod avatar_account_info;
pub mod mint_info;
pub mod rank_account_info;
pub mod supply_account_info;
pub mod system_program_info;
pub mod token_account_info;
pub mod token_program_info;
pub mod trait_account_info;
pub mod uninitialized_account_info;
