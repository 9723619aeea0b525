pub mod avatar_fixture;
pub mod utils;

pub use avatar_fixture::AvatarFixture;
