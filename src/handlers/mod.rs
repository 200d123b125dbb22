pub mod health;
pub mod keywords;
pub mod search;

pub use health::*;
pub use keywords::*;
pub use search::*;
