use bson::{Bson, Document, doc};
use serde::Serialize;

use crate::errors::CommandError;
use crate::options::{Order, ReturnDocument, SortSpec};

use super::core::FindOneAndUpdateModel;

impl<F: Serialize, U: Serialize> FindOneAndUpdateModel<F, U> {
    /// Folds the model into the single command document the transport layer
    /// transmits. Settings left at their defaults are omitted.
    ///
    /// # Errors
    /// Returns an error if the filter or update value cannot be converted by
    /// the serializer.
    pub fn to_command(&self, collection: &str) -> Result<Document, CommandError> {
        let mut cmd = doc! {
            "findAndModify": collection,
            "query": bson::serialize_to_bson(self.filter())?,
            "update": bson::serialize_to_bson(self.update())?,
        };
        let opts = self.options();
        if let Some(sort) = &opts.sort {
            cmd.insert("sort", sort_document(sort));
        }
        if let Some(fields) = &opts.projection {
            cmd.insert("fields", projection_document(fields));
        }
        if let Some(collation) = &opts.collation {
            cmd.insert("collation", bson::serialize_to_bson(collation)?);
        }
        if opts.return_document == ReturnDocument::After {
            cmd.insert("new", true);
        }
        if opts.upsert {
            cmd.insert("upsert", true);
        }
        log::debug!("assembled findAndModify command for collection {collection}");
        Ok(cmd)
    }
}

fn sort_document(specs: &[SortSpec]) -> Document {
    let mut d = Document::new();
    for spec in specs {
        let direction = match spec.order {
            Order::Asc => 1,
            Order::Desc => -1,
        };
        d.insert(spec.field.clone(), Bson::Int32(direction));
    }
    d
}

fn projection_document(fields: &[String]) -> Document {
    let mut d = Document::new();
    for field in fields {
        d.insert(field.clone(), Bson::Int32(1));
    }
    d
}
