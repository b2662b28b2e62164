pub mod install;
pub mod tables;
pub mod types;

pub use install::install_all;
pub use tables::builtin;
pub use types::{Registry, TableSpec};
