pub mod case;
pub mod cli;
pub mod config;
pub mod resolution;
pub mod session;

pub use edmig_common::error;
pub use edmig_common::formatter;
pub use edmig_common::model;
pub use edmig_common::naming;
