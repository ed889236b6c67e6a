pub mod config;
pub mod grant;
pub mod roles;
pub mod schedule;

pub use config::*;
pub use grant::*;
pub use roles::*;
pub use schedule::*;
