use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Scope;
use crate::store::{CatalogStore, Mutation, SlotBackend};

/// Folds a store outcome into `result`.
///
/// Rejections become error messages and yield `Ok(None)`; a persistence failure on an
/// accepted mutation becomes a warning. Other errors propagate.
pub fn record_mutation(
    result: &mut CmdResult,
    outcome: Result<Mutation>,
) -> Result<Option<Mutation>> {
    match outcome {
        Ok(mutation) => {
            if let Some(warning) = &mutation.persist_warning {
                result.add_message(CmdMessage::warning(warning.clone()));
            }
            Ok(Some(mutation))
        }
        Err(CatalogError::Rejected(rejection)) => {
            result.add_message(CmdMessage::error(rejection.to_string()));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Looks a scope up, adding an error message when it does not exist.
pub fn require_scope<'a, B: SlotBackend>(
    store: &'a CatalogStore<B>,
    scope_name: &str,
    result: &mut CmdResult,
) -> Option<&'a Scope> {
    let scope = store.scope(scope_name.trim());
    if scope.is_none() {
        result.add_message(CmdMessage::error(format!(
            "Scope '{}' does not exist",
            scope_name.trim()
        )));
    }
    scope
}
