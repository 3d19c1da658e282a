pub mod corpus;
pub mod highlight;
pub mod search;

pub use corpus::*;
pub use highlight::*;
pub use search::*;
