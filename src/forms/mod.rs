pub use login::*;

mod login;
