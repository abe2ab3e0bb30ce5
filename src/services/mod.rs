pub use api::*;
pub use auth::*;
pub use login::*;
pub use scope::*;
pub use storage::*;

mod api;
mod auth;
mod login;
mod scope;
mod storage;
