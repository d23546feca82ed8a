#![forbid(unsafe_code)]

#[macro_use]
pub mod prelude;

pub mod demo;
pub mod report;
pub mod repr;
pub mod traits;
pub mod univ;
