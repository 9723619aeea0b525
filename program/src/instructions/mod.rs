pub mod equip_trait;
pub mod initialize_avatar;
pub mod initialize_supply;
pub mod mint_badge;
pub mod mint_id_card;
pub mod redeem_badge;
pub mod register_trait;
pub mod rename_avatar;

pub use {
    equip_trait::process_equip_trait, initialize_avatar::process_initialize_avatar,
    initialize_supply::process_initialize_supply, mint_badge::process_mint_badge,
    mint_id_card::process_mint_id_card, redeem_badge::process_redeem_badge,
    register_trait::process_register_trait, rename_avatar::process_rename_avatar,
};
