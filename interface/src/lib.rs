#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod pack;
pub mod state;
pub mod utils;

pub mod program {
    pinocchio_pubkey::declare_id!("6BWDkBhfng443cWz8oZ74Mq12Zs3GvznD7cmV7GbfQTw");
}
