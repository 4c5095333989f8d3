pub mod api_client;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use api_client::{ApiClient, TokenSource};
pub use transport::HttpTransport;
