#[macro_use]
extern crate lazy_static;

pub mod libs;

pub use crate::libs::nt::*;
pub use crate::libs::orf::*;
