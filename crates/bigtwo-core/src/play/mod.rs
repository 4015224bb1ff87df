pub mod category;
pub mod combo;
pub mod generator;
pub mod validator;

pub use category::Category;
pub use combo::Combination;
pub use validator::valid_plays;
