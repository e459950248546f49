pub mod listing;
pub mod responses;

pub use listing::*;
pub use responses::*;
