pub mod path;
pub mod rounding;

pub use rounding::round;
