use client::{
    mollusk_helpers::{utils::wardrobe_err, AvatarFixture},
    DEFAULT_CREDIT_BALANCE, TREASURY_CREDIT_ATA_ADDRESS,
};
use mollusk_svm::result::Check;
use solana_address::Address;
use solana_sdk::program_pack::Pack;
use spl_token_interface::state::Account as SplTokenAccount;
use wardrobe_interface::{error::WardrobeError, state::collectible::Collectible};

#[test]
fn mint_id_card_charges_the_price() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();
    let price = Collectible::IdCard.price();

    let result = mollusk
        .process_and_validate_instruction(&fixture.avatar.mint_id_card(), &[Check::success()]);

    // The user holds the freshly minted ID card.
    let id_card_ata = result
        .get_account(&fixture.collectible_ata(Collectible::IdCard))
        .expect("Couldn't find the ID card token account");
    assert_eq!(SplTokenAccount::unpack(&id_card_ata.data).unwrap().amount, 1);

    // The price moved from the user to the treasury.
    let user_credits = result
        .get_account(&fixture.user_credit_ata())
        .expect("Couldn't find the user credit account");
    let treasury_credits = result
        .get_account(&TREASURY_CREDIT_ATA_ADDRESS)
        .expect("Couldn't find the treasury credit account");
    assert_eq!(
        SplTokenAccount::unpack(&user_credits.data).unwrap().amount,
        DEFAULT_CREDIT_BALANCE - price
    );
    assert_eq!(
        SplTokenAccount::unpack(&treasury_credits.data)
            .unwrap()
            .amount,
        price
    );
}

#[test]
fn minting_two_id_cards_stacks_them() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    mollusk.process_instruction_chain(&[fixture.avatar.mint_id_card()]);
    let result = mollusk
        .process_and_validate_instruction(&fixture.avatar.mint_id_card(), &[Check::success()]);

    let id_card_ata = result
        .get_account(&fixture.collectible_ata(Collectible::IdCard))
        .expect("Couldn't find the ID card token account");
    assert_eq!(SplTokenAccount::unpack(&id_card_ata.data).unwrap().amount, 2);
}

#[test]
fn minting_against_the_wrong_mint_fails() {
    let fixture = AvatarFixture::new();
    let mollusk = fixture.mollusk();

    // Swap the ID card mint for a badge mint.
    let mut instruction = fixture.avatar.mint_id_card();
    instruction.accounts[1].pubkey = Address::new_from_array(*Collectible::BadgeBronze.mint());

    mollusk.process_and_validate_instruction(
        &instruction,
        &[Check::err(wardrobe_err(
            WardrobeError::InvalidCollectibleMint,
        ))],
    );
}

#[test]
fn minting_without_enough_credits_fails() {
    let fixture = AvatarFixture::new();

    // Leave the user with less than the ID card price.
    let mut accounts = fixture.accounts();
    for (address, account) in accounts.iter_mut() {
        if *address == fixture.user_credit_ata() {
            *account = client::mollusk_helpers::utils::create_token_account(
                &client::CREDIT_MINT_ADDRESS,
                &fixture.user,
                Collectible::IdCard.price() - 1,
            );
        }
    }
    let mollusk = client::new_wardrobe_mollusk_context(accounts);

    let result = mollusk.process_instruction_chain(&[fixture.avatar.mint_id_card()]);
    assert!(result.raw_result.is_err());
}
