//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, TwilioAdapter, SERVICE_NAME};
pub use test_dependencies::MockOtpProvider;
pub use traits::{BaseOtpProvider, ProviderError};
