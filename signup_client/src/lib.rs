pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::app::{RunOutcome, execute, run};
pub use frameworks::cli::Args;
pub use use_cases::{RegistrationDeps, RegistrationForm};
