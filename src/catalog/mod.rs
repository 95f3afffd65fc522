pub mod rating_calculator;
pub mod store;

pub use rating_calculator::*;
pub use store::*;
