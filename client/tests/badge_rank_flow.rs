use client::{
    context::avatar::initialize_supply,
    mollusk_helpers::{utils::wardrobe_err, AvatarFixture},
};
use mollusk_svm::result::Check;
use wardrobe_interface::{
    error::WardrobeError,
    state::{
        collectible::{BadgeTier, Collectible},
        rank::RankAccount,
        supply::SupplyAccount,
        transmutable::load,
    },
};

const OPEN_SUPPLY: [u16; 5] = [100, 100, 100, 100, 100];

#[test]
fn badges_mint_and_redeem_in_tier_order() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();
    let avatar = &fixture.avatar;

    mollusk.process_instruction_chain(&[avatar.initialize_avatar(), initialize_supply(OPEN_SUPPLY)]);

    // Mint the first badge; the rank account is created on the fly.
    let result = mollusk.process_and_validate_instruction(
        &avatar.mint_badge(Collectible::BadgeBronze),
        &[Check::success()],
    );
    let rank_data = &result
        .get_account(&avatar.rank_account)
        .expect("Couldn't find the rank account")
        .data;
    // Safety: All bit patterns are valid.
    let rank = unsafe { load::<RankAccount>(rank_data) }.unwrap();
    rank.verify_discriminant().unwrap();
    assert_eq!(rank.rank(), 0);
    assert_eq!(rank.minted(), BadgeTier::Bronze as u8);

    // A second mint is blocked while the bronze badge is outstanding.
    mollusk.process_and_validate_instruction(
        &avatar.mint_badge(Collectible::BadgeSilver),
        &[Check::err(wardrobe_err(
            WardrobeError::BadgeAlreadyOutstanding,
        ))],
    );

    // Redeeming the bronze badge raises the rank and unlocks silver.
    let result = mollusk.process_and_validate_instruction(
        &avatar.redeem_badge(Collectible::BadgeBronze),
        &[Check::success()],
    );
    let rank_data = &result
        .get_account(&avatar.rank_account)
        .expect("Couldn't find the rank account")
        .data;
    let rank = unsafe { load::<RankAccount>(rank_data) }.unwrap();
    assert_eq!(rank.rank(), BadgeTier::Bronze as u8);

    mollusk.process_and_validate_instruction(
        &avatar.mint_badge(Collectible::BadgeSilver),
        &[Check::success()],
    );

    // Redeeming the spent bronze badge again is out of order.
    mollusk.process_and_validate_instruction(
        &avatar.redeem_badge(Collectible::BadgeBronze),
        &[Check::err(wardrobe_err(WardrobeError::BadgeTierNotNext))],
    );
}

#[test]
fn the_first_badge_must_be_bronze() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    mollusk.process_instruction_chain(&[
        fixture.avatar.initialize_avatar(),
        initialize_supply(OPEN_SUPPLY),
    ]);

    mollusk.process_and_validate_instruction(
        &fixture.avatar.mint_badge(Collectible::BadgeGold),
        &[Check::err(wardrobe_err(WardrobeError::BadgeTierNotNext))],
    );
}

#[test]
fn minting_a_badge_counts_against_the_supply() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    mollusk.process_instruction_chain(&[
        fixture.avatar.initialize_avatar(),
        initialize_supply(OPEN_SUPPLY),
    ]);

    let result = mollusk.process_and_validate_instruction(
        &fixture.avatar.mint_badge(Collectible::BadgeBronze),
        &[Check::success()],
    );

    let supply_data = &result
        .get_account(&client::pda::find_supply_address().0)
        .expect("Couldn't find the supply account")
        .data;
    // Safety: All bit patterns are valid.
    let supply = unsafe { load::<SupplyAccount>(supply_data) }.unwrap();
    assert_eq!(supply.minted(BadgeTier::Bronze), 1);
    assert_eq!(supply.minted(BadgeTier::Silver), 0);
}

#[test]
fn minting_a_badge_without_the_supply_account_fails() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    mollusk.process_instruction_chain(&[fixture.avatar.initialize_avatar()]);

    mollusk.process_and_validate_instruction(
        &fixture.avatar.mint_badge(Collectible::BadgeBronze),
        &[Check::err(wardrobe_err(
            WardrobeError::InvalidSupplyAccountOwner,
        ))],
    );
}

#[test]
fn the_id_card_is_not_a_badge() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    mollusk.process_instruction_chain(&[
        fixture.avatar.initialize_avatar(),
        initialize_supply(OPEN_SUPPLY),
    ]);

    mollusk.process_and_validate_instruction(
        &fixture.avatar.mint_badge(Collectible::IdCard),
        &[Check::err(wardrobe_err(WardrobeError::NotABadge))],
    );
    mollusk.process_and_validate_instruction(
        &fixture.avatar.redeem_badge(Collectible::IdCard),
        &[Check::err(wardrobe_err(WardrobeError::NotABadge))],
    );
}
