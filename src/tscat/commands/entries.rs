use crate::commands::helpers::{record_mutation, require_scope};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TranslationString;
use crate::store::{CatalogStore, SlotBackend};

/// Adds `<full scope string>.<local_id>` to the scope.
///
/// Every empty field is reported at once, like a form marking all invalid inputs.
pub fn add<B: SlotBackend>(
    store: &mut CatalogStore<B>,
    scope_name: &str,
    local_id: &str,
    default_value: &str,
) -> Result<CmdResult> {
    let scope_name = scope_name.trim();
    let local_id = local_id.trim();
    let mut result = CmdResult::default();

    let full_scope = match require_scope(store, scope_name, &mut result) {
        Some(scope) => scope.full_scope_string.clone(),
        None => return Ok(result),
    };

    if local_id.is_empty() {
        result.add_message(CmdMessage::error("Id cannot be empty"));
    }
    if default_value.is_empty() {
        result.add_message(CmdMessage::error("Default value cannot be empty"));
    }
    if full_scope.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "Full scope string of '{}' cannot be empty",
            scope_name
        )));
    }
    if result.has_errors() {
        return Ok(result);
    }

    let full_id = format!("{}.{}", full_scope, local_id);
    let outcome = store.add_entry(
        scope_name,
        TranslationString::new(full_id.clone(), default_value),
    );
    if record_mutation(&mut result, outcome)?.is_some() {
        result.add_message(CmdMessage::success(format!(
            "Added \"{}\" : \"{}\"",
            full_id, default_value
        )));
    }
    Ok(result)
}

/// Deletes an entry by its full id. A local id is accepted when it resolves
/// unambiguously through the scope's full scope string.
pub fn delete<B: SlotBackend>(
    store: &mut CatalogStore<B>,
    scope_name: &str,
    id: &str,
) -> Result<CmdResult> {
    let scope_name = scope_name.trim();
    let id = id.trim();
    let mut result = CmdResult::default();

    let target = match require_scope(store, scope_name, &mut result) {
        Some(scope) => {
            let qualified = format!("{}.{}", scope.full_scope_string, id);
            if scope.entries().any(|e| e.id == id) {
                id.to_string()
            } else if !scope.full_scope_string.is_empty()
                && scope.entries().any(|e| e.id == qualified)
            {
                qualified
            } else {
                id.to_string()
            }
        }
        None => return Ok(result),
    };

    if let Some(mutation) = record_mutation(&mut result, store.delete_entry(scope_name, &target))? {
        if mutation.changed {
            result.add_message(CmdMessage::success(format!(
                "Deleted '{}' successfully.",
                target
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "No translation string '{}' in '{}'.",
                id, scope_name
            )));
        }
    }
    Ok(result)
}
