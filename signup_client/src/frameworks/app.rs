use crate::domain::{
    HOME_ROUTE, LOGIN_ROUTE, Navigator, Notification, Notifier, SubmitError, TOKEN_KEY, TokenStore,
};
use crate::frameworks::cli::{self, Args};
use crate::frameworks::config;
use crate::interface_adapters::{
    AccountClient, ConsoleNavigator, ConsoleNotifier, FileTokenStore, MemoryTokenStore,
    RegisterSchema, create_user_url,
};
use crate::use_cases::{RegistrationDeps, RegistrationForm};
use std::process::ExitCode;
use std::sync::Arc;

const ALREADY_SIGNED_IN_MESSAGE: &str = "Already signed in.";

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// How a run ended; [`RunOutcome::code`] maps it to the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Registered,
    // A token was already stored; nothing was submitted.
    AlreadySignedIn,
    InvalidInput,
    BadConfig,
    Failed,
}

impl RunOutcome {
    pub fn code(self) -> u8 {
        match self {
            RunOutcome::Registered | RunOutcome::AlreadySignedIn => 0,
            RunOutcome::Failed => 1,
            // Bad input or configuration, as opposed to a failed request.
            RunOutcome::InvalidInput | RunOutcome::BadConfig => 2,
        }
    }
}

pub async fn run(args: Args) -> ExitCode {
    ExitCode::from(execute(args).await.code())
}

pub async fn execute(args: Args) -> RunOutcome {
    let host = args.host.clone().unwrap_or_else(config::auth_host);
    let endpoint = match create_user_url(&host) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(%host, error = %e, "invalid auth host");
            return RunOutcome::BadConfig;
        }
    };
    tracing::debug!(%endpoint, "account client configured.");

    let accounts = match AccountClient::new(endpoint, config::auth_request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build http client");
            return RunOutcome::Failed;
        }
    };

    let tokens: Arc<dyn TokenStore> = if args.no_persist {
        Arc::new(MemoryTokenStore::new())
    } else {
        let path = args.storage_file.clone().unwrap_or_else(config::storage_file);
        tracing::debug!(path = %path.display(), "token storage configured.");
        Arc::new(FileTokenStore::new(path))
    };

    let navigator = Arc::new(ConsoleNavigator::new(config::app_url()));
    let notifier = Arc::new(ConsoleNotifier::new());

    cli::print_header();
    cli::print_login_hint(&navigator.location(LOGIN_ROUTE));

    match tokens.get(TOKEN_KEY).await {
        Ok(Some(_)) => {
            tracing::info!("auth token already stored; skipping registration.");
            notifier.notify(Notification::success(ALREADY_SIGNED_IN_MESSAGE));
            navigator.navigate(HOME_ROUTE);
            return RunOutcome::AlreadySignedIn;
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "failed to read token storage");
            return RunOutcome::Failed;
        }
    }

    let deps = RegistrationDeps {
        validator: Arc::new(RegisterSchema::default()),
        accounts: Arc::new(accounts),
        tokens,
        navigator,
        notifier,
    };
    let form = RegistrationForm::with_input(deps, args.initial_input());

    let interactive = !args.non_interactive && console::user_attended_stderr();

    loop {
        if interactive {
            let state = form.state();
            for field in cli::fields_to_prompt(&state.input, &state.errors) {
                match cli::prompt_field(field, state.input.value(field)) {
                    Ok(value) => form.update_field(field, value),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read input");
                        return RunOutcome::Failed;
                    }
                }
            }
        }

        match form.submit().await {
            Ok(_) => return RunOutcome::Registered,
            Err(SubmitError::Invalid(errors)) => {
                cli::print_field_errors(&errors);
                if !interactive {
                    return RunOutcome::InvalidInput;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "registration failed");
                return RunOutcome::Failed;
            }
        }
    }
}
