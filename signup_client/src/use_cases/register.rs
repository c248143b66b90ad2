use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{
    AccountProvider, AuthResult, CreateAccountRequest, Field, FieldErrors, HOME_ROUTE, Navigator,
    Notification, Notifier, RegistrationInput, RegistrationValidator, SubmitError, TOKEN_KEY,
    TokenStore,
};

pub const SUCCESS_MESSAGE: &str = "Account Created Successfully!";
pub const FAILURE_MESSAGE: &str = "Account not created!";

// Collaborators injected into the form. Arc<dyn Trait> lets callers pick
// any adapter at runtime.
#[derive(Clone)]
pub struct RegistrationDeps {
    pub validator: Arc<dyn RegistrationValidator>,
    pub accounts: Arc<dyn AccountProvider>,
    pub tokens: Arc<dyn TokenStore>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

// Snapshot of what a front end needs to render the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub input: RegistrationInput,
    pub errors: FieldErrors,
    pub submitting: bool,
}

// Returned when the account exists and the token has been stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registered {
    pub token: String,
}

#[derive(Default)]
struct Editable {
    input: RegistrationInput,
    errors: FieldErrors,
}

/// Headless registration form: field edits, validation and account creation.
///
/// `submit` takes `&self` so several tasks may hold the form; only one
/// submission runs at a time; the others return [`SubmitError::InFlight`].
pub struct RegistrationForm {
    deps: RegistrationDeps,
    state: Mutex<Editable>,
    in_flight: AtomicBool,
}

impl RegistrationForm {
    pub fn new(deps: RegistrationDeps) -> Self {
        Self::with_input(deps, RegistrationInput::default())
    }

    pub fn with_input(deps: RegistrationDeps, input: RegistrationInput) -> Self {
        Self {
            deps,
            state: Mutex::new(Editable {
                input,
                errors: FieldErrors::default(),
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock_state();
        state.input = state.input.with_field(field, value);
    }

    pub fn input(&self) -> RegistrationInput {
        self.lock_state().input.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.lock_state().errors.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn state(&self) -> FormState {
        let state = self.lock_state();
        FormState {
            input: state.input.clone(),
            errors: state.errors.clone(),
            submitting: self.is_submitting(),
        }
    }

    #[tracing::instrument(name = "submit_registration", skip_all)]
    pub async fn submit(&self) -> Result<Registered, SubmitError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!("registration already in flight; submit ignored.");
            return Err(SubmitError::InFlight);
        };

        // Validate a snapshot so edits during the request do not leak into it.
        let input = self.input();
        let violations = self.deps.validator.validate(&input);
        if !violations.is_empty() {
            let errors = FieldErrors::from_violations(violations);
            tracing::info!(errors = %errors, "registration input failed validation.");
            self.lock_state().errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.lock_state().errors = FieldErrors::default();

        let request = CreateAccountRequest {
            name: input.name,
            email: input.email,
            password: input.password,
        };
        tracing::debug!("creating account.");

        match self.deps.accounts.create_account(request).await {
            Ok(AuthResult::Created { token }) => {
                if let Err(err) = self.deps.tokens.set(TOKEN_KEY, &token).await {
                    tracing::error!(error = %err, "failed to persist auth token.");
                    self.deps.notifier.notify(Notification::error(FAILURE_MESSAGE));
                    return Err(SubmitError::Storage(err));
                }
                self.deps.navigator.navigate(HOME_ROUTE);
                self.deps
                    .notifier
                    .notify(Notification::success(SUCCESS_MESSAGE));
                tracing::info!("account created.");
                Ok(Registered { token })
            }
            Ok(AuthResult::Rejected) => {
                tracing::info!("account service rejected the registration.");
                self.deps.notifier.notify(Notification::error(FAILURE_MESSAGE));
                Err(SubmitError::Rejected)
            }
            Err(err) => {
                tracing::error!(error = %err, "account request failed.");
                self.deps.notifier.notify(Notification::error(FAILURE_MESSAGE));
                Err(SubmitError::Transport(err.to_string()))
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, Editable> {
        // Edits are plain field swaps, so a poisoned lock still holds usable state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// Clears the in-flight flag on every exit path out of submit().
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
