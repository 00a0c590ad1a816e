pub mod home;
pub mod identity;
pub mod lifecycle;
pub mod session;
#[cfg(not(target_arch = "wasm32"))]
pub mod storage;

pub use home::{Activation, HomeOutcome};
pub use identity::{IdentityClient, ProfileFetcher};
pub use lifecycle::Lifecycle;
pub use session::{StaticToken, TokenSource};
