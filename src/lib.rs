#[macro_use]
extern crate log;

pub mod filter;
pub mod interpolate;
pub mod prelude;
pub mod regression;
pub mod util;
