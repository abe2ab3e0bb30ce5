//! Reusable UI components for the storefront

mod alert;
mod button;
mod input;
mod nav;
mod product_card;

pub use alert::ErrorAlert;
pub use button::SubmitButton;
pub use input::{EmailInput, FieldError, PasswordInput};
pub use nav::{CartIcon, Nav, NavCluster};
pub use product_card::ProductCard;
