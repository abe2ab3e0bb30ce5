pub use product::*;

mod product;
