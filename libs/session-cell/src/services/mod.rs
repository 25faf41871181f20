pub mod auth;
pub mod session;
pub mod token_store;

pub use auth::AuthService;
pub use session::Session;
pub use token_store::TokenStore;
