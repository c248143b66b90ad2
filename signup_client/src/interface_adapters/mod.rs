pub mod clients;
pub mod console;
pub mod protocol;
pub mod schema;
pub mod storage;

pub use clients::{AccountClient, AccountClientError, create_user_url};
pub use console::{ConsoleNavigator, ConsoleNotifier};
pub use schema::RegisterSchema;
pub use storage::{FileTokenStore, MemoryTokenStore};
