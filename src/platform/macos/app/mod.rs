//! Application delegate and deferred platform calls.

pub mod deferred;
pub mod delegate;

pub use delegate::install_delegate;
