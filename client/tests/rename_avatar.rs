use client::{
    mollusk_helpers::{utils::wardrobe_err, AvatarFixture},
};
use mollusk_svm::result::Check;
use solana_sdk::program_pack::Pack;
use spl_token_interface::state::Account as SplTokenAccount;
use wardrobe_interface::{
    error::WardrobeError,
    instructions::InstructionTag,
    state::{avatar::AvatarAccount, collectible::Collectible, transmutable::load},
};

#[test]
fn renaming_burns_an_id_card_and_sets_the_alias() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();
    let avatar = &fixture.avatar;

    mollusk.process_instruction_chain(&[avatar.initialize_avatar(), avatar.mint_id_card()]);

    let result = mollusk.process_and_validate_instruction(
        &avatar.rename_avatar("agent teal").unwrap(),
        &[Check::success()],
    );

    let avatar_data = &result
        .get_account(&avatar.avatar_account)
        .expect("Couldn't find the avatar account")
        .data;
    // Safety: All bit patterns are valid.
    let state = unsafe { load::<AvatarAccount>(avatar_data) }.unwrap();
    assert_eq!(state.alias(), b"agent teal");

    // The ID card was consumed.
    let id_card_ata = result
        .get_account(&fixture.collectible_ata(Collectible::IdCard))
        .expect("Couldn't find the ID card token account");
    assert_eq!(SplTokenAccount::unpack(&id_card_ata.data).unwrap().amount, 0);
}

#[test]
fn renaming_without_an_id_card_fails() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();
    let avatar = &fixture.avatar;

    mollusk.process_instruction_chain(&[
        avatar.initialize_avatar(),
        avatar.mint_id_card(),
        avatar.rename_avatar("first").unwrap(),
    ]);

    // The only ID card is spent; the burn inside the second rename fails.
    let result =
        mollusk.process_instruction_chain(&[avatar.rename_avatar("second").unwrap()]);
    assert!(result.raw_result.is_err());
}

#[test]
fn an_oversized_alias_is_rejected() {
    let fixture = AvatarFixture::new();
    let long_alias = "x".repeat(33);

    // The builder refuses to pack it.
    assert!(fixture.avatar.rename_avatar(&long_alias).is_err());

    // A hostile length byte sneaked past the builder is rejected by the program.
    let mollusk = fixture.mollusk();
    mollusk.process_instruction_chain(&[
        fixture.avatar.initialize_avatar(),
        fixture.avatar.mint_id_card(),
    ]);

    let mut instruction = fixture.avatar.rename_avatar("ok").unwrap();
    instruction.data = [vec![InstructionTag::RenameAvatar as u8, 40], vec![0u8; 32]].concat();

    mollusk.process_and_validate_instruction(
        &instruction,
        &[Check::err(wardrobe_err(WardrobeError::AliasTooLong))],
    );
}
