pub mod area;
pub mod codec;
pub mod cookie;
pub mod error;
pub mod gate;
pub mod service;
pub mod signer;
pub mod token;

pub use area::{Area, CredentialTable};
pub use codec::Claims;
pub use error::AuthError;
pub use service::{AuthService, IssuedToken};
pub use signer::SigningKey;
