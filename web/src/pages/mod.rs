//! Page modules

pub mod landing;
pub mod login;
pub mod register;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegisterPage;
