pub mod environment;
pub mod logging;

pub use environment::ListingConfig;
pub use logging::init_logging;
