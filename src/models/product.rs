/// A product card as displayed in the catalog.
///
/// `price` is pre-formatted with its currency suffix and is never used in
/// arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub price: &'static str,
}
