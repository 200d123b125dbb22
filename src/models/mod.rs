pub mod requests;
pub mod responses;
pub mod search;

pub use requests::*;
pub use responses::*;
pub use search::*;
