pub mod executor;
pub mod timeout_manager;
pub mod url_builder;

pub use executor::{HttpExecutor, JsonMap};
pub use timeout_manager::TimeoutManager;
pub use url_builder::UrlBuilder;
