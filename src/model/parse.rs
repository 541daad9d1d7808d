use bson::Document;
use serde::{Deserialize, Serialize};

use crate::errors::CommandError;
use crate::options::{FindOneAndUpdateOptions, MAX_PROJECTION_FIELDS, MAX_SORT_FIELDS};

use super::core::FindOneAndUpdateModel;

// Serde-facing structure for safe JSON parsing of raw commands
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CommandSerde {
    #[serde(default)]
    pub query: Option<Document>,
    #[serde(default)]
    pub update: Option<Document>,
    #[serde(default)]
    pub options: Option<FindOneAndUpdateOptions>,
}

impl TryFrom<CommandSerde> for FindOneAndUpdateModel<Document, Document> {
    type Error = CommandError;

    fn try_from(cs: CommandSerde) -> Result<Self, Self::Error> {
        let query = cs.query.ok_or(CommandError::MissingArgument("query"))?;
        let update = cs.update.ok_or(CommandError::MissingArgument("update"))?;
        require_update_operators(&update)?;
        let mut options = cs.options.unwrap_or_default();
        if let Some(sort) = options.sort.as_mut() {
            sort.truncate(MAX_SORT_FIELDS);
        }
        if let Some(fields) = options.projection.as_mut() {
            fields.truncate(MAX_PROJECTION_FIELDS);
        }
        Self::with_options(query, update, options)
    }
}

// A raw update must be operator expressions, never a replacement document.
fn require_update_operators(update: &Document) -> Result<(), CommandError> {
    if update.is_empty() {
        return Err(CommandError::InvalidUpdate("update document is empty".into()));
    }
    for key in update.keys() {
        if !key.starts_with('$') {
            return Err(CommandError::InvalidUpdate(format!(
                "expected an update operator, found field {key:?}"
            )));
        }
    }
    Ok(())
}

/// # Errors
/// Returns an error if the JSON string cannot be parsed into a raw command,
/// if `query` or `update` is missing, or if the update is not made of update
/// operators.
pub fn parse_command_json(
    json: &str,
) -> Result<FindOneAndUpdateModel<Document, Document>, CommandError> {
    let cs: CommandSerde = serde_json::from_str(json)?;
    let model = FindOneAndUpdateModel::try_from(cs)?;
    log::debug!("parsed find-one-and-update command");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn operator_keys_pass() {
        assert!(require_update_operators(&doc! {"$set": {"a": 1}, "$inc": {"b": 2}}).is_ok());
    }

    #[test]
    fn replacement_document_rejected() {
        let e = require_update_operators(&doc! {"a": 1}).unwrap_err();
        assert!(matches!(e, CommandError::InvalidUpdate(_)));
    }

    #[test]
    fn empty_update_rejected() {
        let e = require_update_operators(&Document::new()).unwrap_err();
        assert!(matches!(e, CommandError::InvalidUpdate(_)));
    }
}
