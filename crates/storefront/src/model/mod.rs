//! Plain domain data: products, the catalog that holds them, the cart and composed orders.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod product;

pub use cart::*;
pub use catalog::*;
pub use order::*;
pub use product::*;
