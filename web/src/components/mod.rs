//! UI Components

pub mod navbar;
pub mod progress_indicator;
pub mod toaster;

pub use navbar::Navbar;
pub use progress_indicator::ProgressIndicator;
pub use toaster::Toaster;
