//! Hard-coded addresses and prices for the wardrobe deployment.

use pinocchio::pubkey::Pubkey;
use pinocchio_pubkey::pubkey;

/// The wallet that co-signs equips, renames, and redeems, and that registers
/// traits and initializes the badge supply.
pub const AUTHORITY: Pubkey = pubkey!("4XCPMma5sXJNwRpoFDotHk3oRNzoGYqwJYMNbk5YPUGr");

/// The mint of the credit token collectibles are priced in.
pub const CREDIT_MINT: Pubkey = pubkey!("F1J8mDQb5vv1Tj7EJybZmsVDKfsDNHkefCeVcTzSHKrx");

/// The team-controlled token account that receives collectible payments.
pub const TREASURY_CREDIT_ATA: Pubkey = pubkey!("7nECwY1e929N8w5vVBuUjqdMrJbC6kV3whQ2m6dAfQUG");

// Collectible mints. The treasury PDA is the mint authority of each.
pub const ID_CARD_MINT: Pubkey = pubkey!("7f8B2KJhk7xbo7qBeVe2ffjxnwRxVLxKgaZrMygzYi5h");
pub const BADGE_BRONZE_MINT: Pubkey = pubkey!("FN8ccoJ7Pqg76aAAKSFC4jx19a2zb7PfZTK5cB9aY1TY");
pub const BADGE_SILVER_MINT: Pubkey = pubkey!("7yJwUjSQ7hSNHXz6QcyHMAesivfabhKoDeJSTNundKYM");
pub const BADGE_GOLD_MINT: Pubkey = pubkey!("HaFS3RaoUPfNfXFiPnRbVFX3JqpGZk6AhtWKbo4cj3La");
pub const BADGE_PLATINUM_MINT: Pubkey = pubkey!("g9i3caLQmMxpy9WpNRYS7yxRZQtdpm6Gushgbmozz74");
pub const BADGE_DIAMOND_MINT: Pubkey = pubkey!("7kkjS9svtWXqDqHFph7UzTRw7DmEMrJJivMmVKXFDdTY");

// Collectible prices, in base units of the credit token.
pub const PRICE_ID_CARD: u64 = 60;
pub const PRICE_BADGE_BRONZE: u64 = 60;
pub const PRICE_BADGE_SILVER: u64 = 150;
pub const PRICE_BADGE_GOLD: u64 = 210;
pub const PRICE_BADGE_PLATINUM: u64 = 405;
pub const PRICE_BADGE_DIAMOND: u64 = 660;

/// The maximum byte length of an avatar alias.
pub const MAX_ALIAS_LEN: usize = 32;
