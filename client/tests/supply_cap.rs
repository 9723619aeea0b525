use client::{
    context::avatar::initialize_supply,
    mollusk_helpers::{utils::wardrobe_err, AvatarFixture},
    new_wardrobe_mollusk_context,
};
use mollusk_svm::result::Check;
use wardrobe_interface::{error::WardrobeError, state::collectible::Collectible};

#[test]
fn the_last_badge_of_a_tier_goes_to_the_faster_avatar() {
    let first = AvatarFixture::new();
    let second = first.another();

    // One bronze badge for the whole collection.
    let mollusk =
        new_wardrobe_mollusk_context([first.accounts(), second.accounts()].concat());
    mollusk.process_instruction_chain(&[
        initialize_supply([1, 100, 100, 100, 100]),
        first.avatar.initialize_avatar(),
        second.avatar.initialize_avatar(),
    ]);

    mollusk.process_and_validate_instruction(
        &first.avatar.mint_badge(Collectible::BadgeBronze),
        &[Check::success()],
    );

    mollusk.process_and_validate_instruction(
        &second.avatar.mint_badge(Collectible::BadgeBronze),
        &[Check::err(wardrobe_err(WardrobeError::SupplyExhausted))],
    );
}

#[test]
fn the_supply_account_is_a_singleton() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    mollusk.process_and_validate_instruction(
        &initialize_supply([1, 1, 1, 1, 1]),
        &[Check::success()],
    );
    mollusk.process_and_validate_instruction(
        &initialize_supply([2, 2, 2, 2, 2]),
        &[Check::err(wardrobe_err(
            WardrobeError::AlreadyInitializedAccount,
        ))],
    );
}

#[test]
fn initializing_the_supply_requires_the_authority() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    let mut instruction = initialize_supply([1, 1, 1, 1, 1]);
    instruction.accounts[0].pubkey = fixture.user;

    mollusk.process_and_validate_instruction(
        &instruction,
        &[Check::err(wardrobe_err(WardrobeError::InvalidAuthority))],
    );
}
