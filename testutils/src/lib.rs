mod configs;
mod constants;
mod descriptors;

pub use configs::*;
pub use constants::*;
pub use descriptors::*;
