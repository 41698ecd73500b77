//! Form flows backing each screen of the client.

pub mod password;
pub mod profile;
pub mod sign_in;

pub use password::{ForgotPasswordData, ForgotPasswordFlow, ResetPasswordData, ResetPasswordFlow};
pub use profile::{ProfileData, ProfileFlow, avatar_notification, update_avatar};
pub use sign_in::{SignInData, SignInFlow};
