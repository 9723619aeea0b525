pub const AVATAR_SEED_STR: &[u8] = b"avatar";
pub const TRAIT_SEED_STR: &[u8] = b"trait";
pub const RANK_SEED_STR: &[u8] = b"rank";
pub const SUPPLY_SEED_STR: &[u8] = b"supply";
pub const TREASURY_SEED_STR: &[u8] = b"treasury";

/// Signer seeds for the avatar PDA of an avatar mint.
#[macro_export]
macro_rules! avatar_signer {
    ( $mint:expr, $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            $mint.as_ref(),
            $crate::AVATAR_SEED_STR,
            &[$bump]
        ))
    };
}

/// Signer seeds for the trait PDA of a trait mint.
#[macro_export]
macro_rules! trait_signer {
    ( $mint:expr, $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            $mint.as_ref(),
            $crate::TRAIT_SEED_STR,
            &[$bump]
        ))
    };
}

/// Signer seeds for the rank PDA of an avatar mint.
#[macro_export]
macro_rules! rank_signer {
    ( $mint:expr, $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            $mint.as_ref(),
            $crate::RANK_SEED_STR,
            &[$bump]
        ))
    };
}

/// Signer seeds for the singleton supply PDA.
#[macro_export]
macro_rules! supply_signer {
    ( $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            $crate::SUPPLY_SEED_STR,
            &[$bump]
        ))
    };
}

/// Signer seeds for the treasury PDA, the collectible mint authority.
#[macro_export]
macro_rules! treasury_signer {
    ( $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            $crate::TREASURY_SEED_STR,
            &[$bump]
        ))
    };
}
