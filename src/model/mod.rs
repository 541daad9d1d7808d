// Submodules for separation of concerns
mod core;
mod encode;
mod parse;

// Public API re-exports
pub use self::core::FindOneAndUpdateModel;
pub use self::parse::{CommandSerde, parse_command_json};
