mod oauth;
mod store;

pub use oauth::{Authenticator, STATE_LENGTH};
pub use store::{AccessToken, CredentialStore, TokenKind};
