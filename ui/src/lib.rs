//! Components shared by the desktop and web launchers.

mod gate;
mod header;
mod profile;

pub use gate::{IdentityContext, ProfileGate, ProfileHandle, use_profile};
pub use header::Header;
pub use profile::{ErrorPanel, LoadingIndicator, ProfileCard, ProfileView};
