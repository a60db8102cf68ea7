#![warn(rust_2018_idioms, missing_debug_implementations)]
pub mod config;
mod domain;
mod io;
pub mod program;
mod store;

pub use crate::config::StoreConfig;
pub use crate::domain::*;
pub use crate::io::*;
pub use crate::program::*;
pub use crate::store::*;
