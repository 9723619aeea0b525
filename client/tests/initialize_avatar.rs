use client::{
    mollusk_helpers::{utils::wardrobe_err, AvatarFixture},
    new_wardrobe_mollusk_context, PROGRAM_ADDRESS,
};
use mollusk_svm::result::Check;
use wardrobe_interface::{
    error::WardrobeError,
    state::{
        avatar::{AvatarAccount, AVATAR_ACCOUNT_SIZE},
        registered_trait::TraitKind,
        transmutable::load,
    },
};

#[test]
fn initialize_avatar() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();
    let avatar = &fixture.avatar;

    let result = mollusk.process_and_validate_instruction(
        &avatar.initialize_avatar(),
        &[Check::account(&avatar.avatar_account)
            .executable(false)
            .owner(&PROGRAM_ADDRESS)
            .rent_exempt()
            .space(AVATAR_ACCOUNT_SIZE)
            .build()],
    );

    let account_data = &result
        .get_account(&avatar.avatar_account)
        .expect("Couldn't find the avatar account")
        .data;

    // Safety: All bit patterns are valid.
    let state = unsafe { load::<AvatarAccount>(account_data) }.unwrap();
    state.verify_discriminant().unwrap();
    assert_eq!(state.avatar_mint, avatar.avatar_mint.to_bytes());
    assert_eq!(state.bump, avatar.avatar_bump);
    assert!(state.alias().is_empty());
    assert!(!state.slot_is_filled(TraitKind::Skin));
    assert!(!state.slot_is_filled(TraitKind::Mouth));
}

#[test]
fn initialize_avatar_twice_fails() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    mollusk.process_and_validate_instruction(
        &fixture.avatar.initialize_avatar(),
        &[Check::success()],
    );
    mollusk.process_and_validate_instruction(
        &fixture.avatar.initialize_avatar(),
        &[Check::err(wardrobe_err(
            WardrobeError::AlreadyInitializedAccount,
        ))],
    );
}

#[test]
fn initialize_avatar_without_holding_the_token_fails() {
    let fixture = AvatarFixture::new();

    // Empty the user's avatar token account before seeding the store.
    let mut accounts = fixture.accounts();
    for (address, account) in accounts.iter_mut() {
        if *address == fixture.avatar.avatar_ata {
            *account = client::mollusk_helpers::utils::create_token_account(
                &fixture.avatar_mint,
                &fixture.user,
                0,
            );
        }
    }
    let mollusk = new_wardrobe_mollusk_context(accounts);

    mollusk.process_and_validate_instruction(
        &fixture.avatar.initialize_avatar(),
        &[Check::err(wardrobe_err(WardrobeError::TokenAmountIsNotOne))],
    );
}
