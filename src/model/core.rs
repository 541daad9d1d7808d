use crate::errors::CommandError;
use crate::options::FindOneAndUpdateOptions;

/// An immutable description of a single find-one-and-update command.
///
/// `F` and `U` are caller-chosen filter/update types; anything the
/// serialization layer can convert is accepted, and no conversion happens
/// until the wire command is assembled. The update value must consist only of
/// update-operator expressions, not a full replacement document; that is the
/// caller's obligation and is not checked here.
///
/// Once built, the model has no mutators and can be read from any number of
/// threads. The execution layer consumes it through the three accessors and
/// never hands it back.
#[derive(Debug, Clone, PartialEq)]
pub struct FindOneAndUpdateModel<F, U> {
    filter: F,
    update: U,
    options: FindOneAndUpdateOptions,
}

impl<F, U> FindOneAndUpdateModel<F, U> {
    /// Builds a model with default options.
    ///
    /// Arguments are taken as `impl Into<Option<T>>` so plain values work
    /// directly while boundaries holding an `Option` can pass it through.
    ///
    /// # Errors
    /// Returns `CommandError::MissingArgument` if `filter` or `update` is
    /// absent.
    pub fn new(
        filter: impl Into<Option<F>>,
        update: impl Into<Option<U>>,
    ) -> Result<Self, CommandError> {
        Self::with_options(filter, update, FindOneAndUpdateOptions::new())
    }

    /// Builds a model with explicit options. An absent `options` value is
    /// rejected here; use [`new`](Self::new) for the defaults.
    ///
    /// # Errors
    /// Returns `CommandError::MissingArgument` if `filter`, `update`, or
    /// `options` is absent.
    pub fn with_options(
        filter: impl Into<Option<F>>,
        update: impl Into<Option<U>>,
        options: impl Into<Option<FindOneAndUpdateOptions>>,
    ) -> Result<Self, CommandError> {
        let filter = filter.into().ok_or(CommandError::MissingArgument("filter"))?;
        let update = update.into().ok_or(CommandError::MissingArgument("update"))?;
        let options = options.into().ok_or(CommandError::MissingArgument("options"))?;
        Ok(Self { filter, update, options })
    }

    /// The selection criteria identifying the document to modify.
    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// The update operators to apply to the matched document.
    #[must_use]
    pub const fn update(&self) -> &U {
        &self.update
    }

    #[must_use]
    pub const fn options(&self) -> &FindOneAndUpdateOptions {
        &self.options
    }
}
