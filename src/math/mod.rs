pub mod range;

pub use range::Range;
