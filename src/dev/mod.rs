/// Development utilities module
///
/// Fixture-backed API client for running without network access, and
/// screenshot capture of the TUI.

pub mod mock_client;
pub mod screenshot;

pub use mock_client::MockClient;
