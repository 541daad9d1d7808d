pub mod errors;
pub mod model;
pub mod options;

pub use crate::errors::CommandError;
pub use crate::model::{CommandSerde, FindOneAndUpdateModel, parse_command_json};
pub use crate::options::{
    Collation, FindOneAndUpdateOptions, Order, ReturnDocument, SortSpec,
};
