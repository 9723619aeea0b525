use client::{
    context::avatar::register_trait,
    mollusk_helpers::{
        utils::{create_mint_account, create_token_account, wardrobe_err},
        AvatarFixture,
    },
    new_wardrobe_mollusk_context,
};
use mollusk_svm::result::Check;
use solana_address::Address;
use solana_sdk::program_pack::Pack;
use spl_associated_token_account_interface::address::get_associated_token_address;
use spl_token_interface::state::Mint;
use wardrobe_interface::{
    error::WardrobeError,
    state::{avatar::AvatarAccount, registered_trait::TraitKind, transmutable::load},
};

#[test]
fn equip_trait_fills_the_slot_and_burns_the_token() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();
    let avatar = &fixture.avatar;

    mollusk.process_instruction_chain(&[
        avatar.initialize_avatar(),
        register_trait(&fixture.trait_mint, TraitKind::Hat),
    ]);

    let result = mollusk.process_and_validate_instruction(
        &avatar.equip_trait(&fixture.trait_mint),
        &[Check::success()],
    );

    // The hat slot is filled and the other slots are untouched.
    let avatar_data = &result
        .get_account(&avatar.avatar_account)
        .expect("Couldn't find the avatar account")
        .data;
    // Safety: All bit patterns are valid.
    let state = unsafe { load::<AvatarAccount>(avatar_data) }.unwrap();
    assert!(state.slot_is_filled(TraitKind::Hat));
    assert!(!state.slot_is_filled(TraitKind::Skin));

    // The trait token was burned out of existence.
    let trait_ata = result
        .get_account(&fixture.trait_ata())
        .expect("Couldn't find the trait token account");
    let trait_mint = result
        .get_account(&fixture.trait_mint)
        .expect("Couldn't find the trait mint");
    assert_eq!(
        spl_token_interface::state::Account::unpack(&trait_ata.data)
            .unwrap()
            .amount,
        0
    );
    assert_eq!(Mint::unpack(&trait_mint.data).unwrap().supply, 0);
}

#[test]
fn equipping_a_second_trait_of_the_same_kind_fails() {
    let fixture = AvatarFixture::new();

    // A second hat trait held by the same user.
    let other_trait_mint = Address::new_unique();
    let mut accounts = fixture.accounts();
    accounts.push((other_trait_mint, create_mint_account(None, 1, 0)));
    accounts.push((
        get_associated_token_address(&fixture.user, &other_trait_mint),
        create_token_account(&other_trait_mint, &fixture.user, 1),
    ));
    let mollusk = new_wardrobe_mollusk_context(accounts);
    let avatar = &fixture.avatar;

    mollusk.process_instruction_chain(&[
        avatar.initialize_avatar(),
        register_trait(&fixture.trait_mint, TraitKind::Hat),
        register_trait(&other_trait_mint, TraitKind::Hat),
        avatar.equip_trait(&fixture.trait_mint),
    ]);

    mollusk.process_and_validate_instruction(
        &avatar.equip_trait(&other_trait_mint),
        &[Check::err(wardrobe_err(WardrobeError::SlotTaken))],
    );

    // The second trait token survives the failed equip.
    let trait_ata = get_associated_token_address(&fixture.user, &other_trait_mint);
    let store = mollusk.account_store.borrow();
    let account = store.get(&trait_ata).expect("Couldn't find the trait ATA");
    assert_eq!(
        spl_token_interface::state::Account::unpack(&account.data)
            .unwrap()
            .amount,
        1
    );
}

#[test]
fn equipping_an_unregistered_trait_fails() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();
    let avatar = &fixture.avatar;

    mollusk.process_instruction_chain(&[avatar.initialize_avatar()]);

    mollusk.process_and_validate_instruction(
        &avatar.equip_trait(&fixture.trait_mint),
        &[Check::err(wardrobe_err(
            WardrobeError::InvalidTraitAccountOwner,
        ))],
    );
}

#[test]
fn registering_a_trait_requires_the_authority() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    // Swap the authority for the (funded) user.
    let mut instruction = register_trait(&fixture.trait_mint, TraitKind::Eyes);
    instruction.accounts[0].pubkey = fixture.user;

    mollusk.process_and_validate_instruction(
        &instruction,
        &[Check::err(wardrobe_err(WardrobeError::InvalidAuthority))],
    );
}
