pub mod baseline;
pub mod generate;

pub use baseline::*;
pub use generate::*;
