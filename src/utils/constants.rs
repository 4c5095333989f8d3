/// Backend used when API_URL is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// localStorage key holding the raw bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// localStorage key holding the JSON-serialized user profile
pub const USER_STORAGE_KEY: &str = "user";

/// Currency preselected in the create form
pub const DEFAULT_CURRENCY: &str = "USD";

/// Currencies offered by the create/edit form
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "JPY"];
