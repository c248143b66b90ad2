use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{
    AccountError, AccountProvider, AuthResult, CreateAccountRequest, FieldError, Navigator,
    Notification, Notifier, RegistrationInput, RegistrationValidator, TokenStore,
};
use crate::use_cases::register::{RegistrationDeps, RegistrationForm};

// Validator that always reports the same violations.
pub(crate) struct FixedValidator(Vec<FieldError>);

impl FixedValidator {
    pub(crate) fn new(violations: Vec<FieldError>) -> Self {
        Self(violations)
    }
}

impl RegistrationValidator for FixedValidator {
    fn validate(&self, _input: &RegistrationInput) -> Vec<FieldError> {
        self.0.clone()
    }
}

// Account service fake that records requests and replays one answer.
#[derive(Clone)]
pub(crate) struct ScriptedAccounts {
    answer: Result<AuthResult, AccountError>,
    requests: Arc<Mutex<Vec<CreateAccountRequest>>>,
    // When set, create_account() parks until release() is called.
    gate: Option<Arc<Notify>>,
    started: Arc<Notify>,
}

impl ScriptedAccounts {
    fn answering(answer: Result<AuthResult, AccountError>) -> Self {
        Self {
            answer,
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
            started: Arc::new(Notify::new()),
        }
    }

    pub(crate) fn created(token: &str) -> Self {
        Self::answering(Ok(AuthResult::Created {
            token: token.to_string(),
        }))
    }

    pub(crate) fn rejected() -> Self {
        Self::answering(Ok(AuthResult::Rejected))
    }

    pub(crate) fn failing(err: AccountError) -> Self {
        Self::answering(Err(err))
    }

    pub(crate) fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub(crate) async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub(crate) fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub(crate) fn requests(&self) -> Vec<CreateAccountRequest> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl AccountProvider for ScriptedAccounts {
    async fn create_account(&self, req: CreateAccountRequest) -> Result<AuthResult, AccountError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(req);
        self.started.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.answer.clone()
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingTokenStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl RecordingTokenStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("values mutex poisoned")
            .get(key)
            .cloned()
    }
}

#[async_trait]
impl TokenStore for RecordingTokenStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if self.fail_writes {
            return Err("write failed".to_string());
        }
        let mut guard = self.values.lock().expect("values mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.value(key))
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<String> {
        self.routes.lock().expect("routes mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes
            .lock()
            .expect("routes mutex poisoned")
            .push(route.to_string());
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notifications mutex poisoned")
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("notifications mutex poisoned")
            .push(notification);
    }
}

// Fakes wired together; tests inspect them after driving the form.
pub(crate) struct Harness {
    validator: Arc<dyn RegistrationValidator>,
    pub(crate) accounts: ScriptedAccounts,
    pub(crate) tokens: RecordingTokenStore,
    pub(crate) navigator: RecordingNavigator,
    pub(crate) notifier: RecordingNotifier,
}

pub(crate) struct HarnessBuilder {
    validator: Arc<dyn RegistrationValidator>,
    accounts: ScriptedAccounts,
    tokens: RecordingTokenStore,
}

impl Harness {
    pub(crate) fn builder() -> HarnessBuilder {
        HarnessBuilder {
            validator: Arc::new(FixedValidator::new(Vec::new())),
            accounts: ScriptedAccounts::created("test-token"),
            tokens: RecordingTokenStore::new(),
        }
    }

    pub(crate) fn deps(&self) -> RegistrationDeps {
        RegistrationDeps {
            validator: self.validator.clone(),
            accounts: Arc::new(self.accounts.clone()),
            tokens: Arc::new(self.tokens.clone()),
            navigator: Arc::new(self.navigator.clone()),
            notifier: Arc::new(self.notifier.clone()),
        }
    }

    pub(crate) fn form_with(&self, input: RegistrationInput) -> RegistrationForm {
        RegistrationForm::with_input(self.deps(), input)
    }
}

impl HarnessBuilder {
    pub(crate) fn validator(mut self, validator: impl RegistrationValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    pub(crate) fn accounts(mut self, accounts: ScriptedAccounts) -> Self {
        self.accounts = accounts;
        self
    }

    pub(crate) fn tokens(mut self, tokens: RecordingTokenStore) -> Self {
        self.tokens = tokens;
        self
    }

    pub(crate) fn build(self) -> Harness {
        Harness {
            validator: self.validator,
            accounts: self.accounts,
            tokens: self.tokens,
            navigator: RecordingNavigator::default(),
            notifier: RecordingNotifier::default(),
        }
    }
}
