pub mod gate;
pub mod identity;
pub mod logout;
pub mod model;
pub mod refresher;
pub mod token_store;

pub use gate::{GateOutcome, ensure_access_token};
pub use identity::get_current_user;
pub use logout::logout;
pub use model::{AccessToken, CredentialPair, RefreshToken, StoredTokens, UserProfile};
pub use refresher::{refresh, refresh_stored};
pub use token_store::{CookieSettings, TokenStore};
