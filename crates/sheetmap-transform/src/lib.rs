#![deny(unsafe_code)]

pub mod sort;

pub use sort::sort_rows;
