//! Exercises the zero-copy account views against raw byte buffers, the same way the program
//! works with account data.

use pinocchio_pubkey::pubkey;
use wardrobe_interface::{
    error::WardrobeError,
    state::{
        avatar::{initialize_avatar_account, AvatarAccount, AVATAR_ACCOUNT_SIZE},
        collectible::BadgeTier,
        rank::{initialize_rank_account, RankAccount, RANK_ACCOUNT_SIZE},
        registered_trait::{
            initialize_trait_account, TraitAccount, TraitKind, TRAIT_ACCOUNT_SIZE,
        },
        supply::{initialize_supply_account, SupplyAccount, SUPPLY_ACCOUNT_SIZE},
        transmutable::load,
    },
};

const AVATAR_MINT: [u8; 32] = pubkey!("3J6gBhKScZLyX4u16kHyfGwuSU8mP4hZiTunw8sscV2a");

#[test]
fn avatar_account_through_bytes() {
    let mut bytes = [0u8; AVATAR_ACCOUNT_SIZE];

    {
        let avatar = initialize_avatar_account(&mut bytes, &AVATAR_MINT, 251).unwrap();
        avatar.fill_slot(TraitKind::Mouth).unwrap();
        avatar.set_alias(b"harbor").unwrap();
    }

    // Reload from the raw bytes, as a later instruction would.
    let avatar = unsafe { load::<AvatarAccount>(&bytes) }.unwrap();
    avatar.verify_discriminant().unwrap();
    assert_eq!(avatar.avatar_mint, AVATAR_MINT);
    assert_eq!(avatar.bump, 251);
    assert!(avatar.slot_is_filled(TraitKind::Mouth));
    assert!(!avatar.slot_is_filled(TraitKind::Skin));
    assert_eq!(avatar.alias(), b"harbor");
}

#[test]
fn uninitialized_bytes_fail_the_discriminant_check() {
    let bytes = [0u8; AVATAR_ACCOUNT_SIZE];
    let avatar = unsafe { load::<AvatarAccount>(&bytes) }.unwrap();
    assert_eq!(
        avatar.verify_discriminant(),
        Err(WardrobeError::InvalidAccountDiscriminant)
    );

    // Truncated buffers fail before the discriminant is even read.
    assert!(unsafe { load::<AvatarAccount>(&bytes[..AVATAR_ACCOUNT_SIZE - 1]) }.is_err());
}

#[test]
fn trait_account_through_bytes() {
    let trait_mint = [9u8; 32];
    let mut bytes = [0u8; TRAIT_ACCOUNT_SIZE];
    initialize_trait_account(&mut bytes, &trait_mint, TraitKind::Clothing, 249).unwrap();

    let registered = unsafe { load::<TraitAccount>(&bytes) }.unwrap();
    registered.verify_discriminant().unwrap();
    assert_eq!(registered.trait_mint, trait_mint);
    assert_eq!(registered.kind().unwrap(), TraitKind::Clothing);
}

#[test]
fn rank_account_through_bytes() {
    let mut bytes = [0u8; RANK_ACCOUNT_SIZE];

    {
        let rank = initialize_rank_account(&mut bytes, &AVATAR_MINT, 247).unwrap();
        rank.check_mint_allowed(BadgeTier::Bronze).unwrap();
        rank.record_mint(BadgeTier::Bronze);
    }

    // The outstanding mint survives the reload; redeem it.
    let mut reloaded = bytes;
    let rank =
        unsafe { wardrobe_interface::state::transmutable::load_mut::<RankAccount>(&mut reloaded) }
            .unwrap();
    rank.verify_discriminant().unwrap();
    assert_eq!(rank.rank(), 0);
    rank.redeem(BadgeTier::Bronze).unwrap();
    assert_eq!(rank.rank(), 1);
}

#[test]
fn supply_account_through_bytes() {
    let mut bytes = [0u8; SUPPLY_ACCOUNT_SIZE];
    initialize_supply_account(&mut bytes, [3, 2, 1, 1, 1], 245).unwrap();

    let supply = unsafe { load::<SupplyAccount>(&bytes) }.unwrap();
    supply.verify_discriminant().unwrap();
    assert_eq!(supply.max_supply(BadgeTier::Bronze), 3);
    assert_eq!(supply.minted(BadgeTier::Bronze), 0);
}
