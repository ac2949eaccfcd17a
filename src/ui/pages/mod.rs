//! Application pages module
//!
//! One page per route:
//! - Sign-up page (home)
//! - Sign-in page
//! - Not found fallback

mod login;
mod not_found;
mod signup;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
