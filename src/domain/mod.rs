pub mod dedup;
pub mod lead;
pub mod score;

pub use dedup::*;
pub use lead::*;
pub use score::*;
