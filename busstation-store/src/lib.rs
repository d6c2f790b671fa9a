pub mod app_config;
pub mod backend_client;
pub mod session_store;

pub use app_config::Config;
pub use backend_client::BackendClient;
pub use session_store::FileSessionStore;
