pub mod error;
pub mod feature_flags;
pub mod password;
pub mod requests;

pub use error::*;
pub use feature_flags::*;
pub use password::{validate_new_password, PasswordError};
pub use requests::*;
