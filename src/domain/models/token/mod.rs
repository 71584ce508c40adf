pub mod token;

pub use token::{Claims, TokenPair, ACCESS_TOKEN_TYPE};
