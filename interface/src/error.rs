use pinocchio::program_error::ProgramError;

#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum WardrobeError {
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    NotEnoughAccountKeys,
    AlreadyInitializedAccount,
    NotOwnedBySystemProgram,
    InvalidAvatarAccountOwner,
    AvatarMintMismatch,
    InvalidTraitAccountOwner,
    TraitMintMismatch,
    InvalidRankAccountOwner,
    RankMintMismatch,
    InvalidSupplyAccountOwner,
    MissingAuthoritySignature,
    InvalidAuthority,
    OwnerNotTokenProgram,
    MintMismatch,
    IncorrectTokenAccountOwner,
    TokenAmountIsNotOne,
    InvalidTokenProgram,
    InvalidCollectibleMint,
    InvalidCreditMint,
    InvalidTreasuryCreditAccount,
    UnknownCollectible,
    NotABadge,
    InvalidTraitKind,
    SlotTaken,
    BadgeTierNotNext,
    BadgeAlreadyOutstanding,
    NoBadgeOutstanding,
    SupplyExhausted,
    AliasTooLong,
    PaymentAmountMismatch,
}

impl From<WardrobeError> for ProgramError {
    #[inline(always)]
    fn from(e: WardrobeError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<WardrobeError> for &'static str {
    fn from(value: WardrobeError) -> Self {
        match value {
            WardrobeError::InvalidInstructionTag => "Invalid instruction tag",
            WardrobeError::InsufficientByteLength => "Not enough bytes passed",
            WardrobeError::InvalidAccountDiscriminant => "Invalid account discriminant",
            WardrobeError::NotEnoughAccountKeys => "Not enough account keys passed",
            WardrobeError::AlreadyInitializedAccount => "Account has already been initialized",
            WardrobeError::NotOwnedBySystemProgram => "Account isn't owned by the system program",
            WardrobeError::InvalidAvatarAccountOwner => "Avatar account isn't owned by this program",
            WardrobeError::AvatarMintMismatch => "Avatar account doesn't match the avatar mint",
            WardrobeError::InvalidTraitAccountOwner => "Trait account isn't owned by this program",
            WardrobeError::TraitMintMismatch => "Trait account doesn't match the trait mint",
            WardrobeError::InvalidRankAccountOwner => "Rank account isn't owned by this program",
            WardrobeError::RankMintMismatch => "Rank account doesn't match the avatar mint",
            WardrobeError::InvalidSupplyAccountOwner => "Supply account isn't owned by this program",
            WardrobeError::MissingAuthoritySignature => "The wardrobe authority didn't sign",
            WardrobeError::InvalidAuthority => "Account isn't the wardrobe authority",
            WardrobeError::OwnerNotTokenProgram => "Account isn't owned by a token program",
            WardrobeError::MintMismatch => "Token account mint doesn't match the expected mint",
            WardrobeError::IncorrectTokenAccountOwner => "Token account has an unexpected owner",
            WardrobeError::TokenAmountIsNotOne => "Token account doesn't hold exactly one token",
            WardrobeError::InvalidTokenProgram => "Invalid token program account",
            WardrobeError::InvalidCollectibleMint => "Mint doesn't match the collectible's mint",
            WardrobeError::InvalidCreditMint => "Mint isn't the credit token mint",
            WardrobeError::InvalidTreasuryCreditAccount => {
                "Account isn't the treasury credit token account"
            }
            WardrobeError::UnknownCollectible => "Unknown collectible id",
            WardrobeError::NotABadge => "Collectible isn't a badge",
            WardrobeError::InvalidTraitKind => "Unknown trait kind",
            WardrobeError::SlotTaken => "The avatar's slot for this trait kind is already filled",
            WardrobeError::BadgeTierNotNext => "Badge tier isn't the avatar's next rank",
            WardrobeError::BadgeAlreadyOutstanding => "A minted badge hasn't been redeemed yet",
            WardrobeError::NoBadgeOutstanding => "No minted badge is outstanding for this tier",
            WardrobeError::SupplyExhausted => "The badge tier's supply has been exhausted",
            WardrobeError::AliasTooLong => "Alias exceeds the maximum length",
            WardrobeError::PaymentAmountMismatch => {
                "Received payment doesn't match the collectible price"
            }
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for WardrobeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type WardrobeResult = Result<(), WardrobeError>;
