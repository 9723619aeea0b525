pub mod create_account;
pub mod seeds;
pub mod token_utils;
