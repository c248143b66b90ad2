pub mod register;

#[cfg(test)]
pub(crate) mod test_support;

pub use register::{
    FAILURE_MESSAGE, FormState, Registered, RegistrationDeps, RegistrationForm, SUCCESS_MESSAGE,
};
