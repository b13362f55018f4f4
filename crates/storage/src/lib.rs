#![warn(clippy::pedantic)]

pub mod document;
pub mod file;

pub use file::FileStorage;
