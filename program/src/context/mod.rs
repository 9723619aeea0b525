pub mod equip_trait_context;
pub mod initialize_avatar_context;
pub mod initialize_supply_context;
pub mod mint_badge_context;
pub mod mint_collectible_context;
pub mod redeem_badge_context;
pub mod register_trait_context;
pub mod rename_avatar_context;
