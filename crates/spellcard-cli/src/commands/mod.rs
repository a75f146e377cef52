//! Command implementations for spellcard-cli

pub mod classes;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod scan;

pub use classes::run_classes;
pub use generate::{GenerateArgs, run_generate};
pub use init::run_init;
pub use inspect::run_inspect;
pub use scan::run_scan;
