pub mod column;
pub mod country;
pub mod product;
