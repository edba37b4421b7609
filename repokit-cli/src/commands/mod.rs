//! CLI command implementations

pub mod clone;
pub mod config;
pub mod create;
pub mod delete;
mod session;

pub use clone::CloneArgs;
pub use config::show_config;
pub use create::CreateArgs;
pub use delete::DeleteArgs;
