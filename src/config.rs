pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "billing-smoke";
#[cfg(windows)]
pub const EXEC_NAME: &str = "billing-smoke.exe";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const WELCOME_MESSAGE: &str = "Welcome to the API";

pub const DEFAULT_CUSTOMER_NAME: &str = "John Doe";
pub const DEFAULT_CUSTOMER_EMAIL: &str = "john.doe@example.com";
pub const DEFAULT_CUSTOMER_ID: &str = "cus_SDmP6q1aUUZcVJ";
