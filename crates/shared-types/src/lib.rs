pub mod config;
pub mod error;
pub mod feature_flags;
pub mod login;
pub mod role;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use login::*;
pub use role::*;
