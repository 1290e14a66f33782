pub mod bump;
pub mod calldata;
