
pub use flight::*;
