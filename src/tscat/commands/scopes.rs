use crate::commands::helpers::{record_mutation, require_scope};
use crate::commands::{CmdMessage, CmdResult, ScopeSummary};
use crate::error::Result;
use crate::model::Scope;
use crate::store::{CatalogStore, SlotBackend};

pub fn add<B: SlotBackend>(store: &mut CatalogStore<B>, scope_name: &str) -> Result<CmdResult> {
    let scope_name = scope_name.trim();
    let mut result = CmdResult::default();

    let outcome = store.add_scope(Scope::new(scope_name));
    if let Some(mutation) = record_mutation(&mut result, outcome)? {
        if mutation.changed {
            result.add_message(CmdMessage::success(format!(
                "Added '{}' scope successfully.",
                scope_name
            )));
        }
    }
    Ok(result)
}

pub fn delete<B: SlotBackend>(store: &mut CatalogStore<B>, scope_name: &str) -> Result<CmdResult> {
    let scope_name = scope_name.trim();
    let mut result = CmdResult::default();

    if let Some(mutation) = record_mutation(&mut result, store.delete_scope(scope_name))? {
        if mutation.changed {
            result.add_message(CmdMessage::success(format!(
                "Deleted '{}' scope successfully.",
                scope_name
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "No scope named '{}'.",
                scope_name
            )));
        }
    }
    Ok(result)
}

pub fn set_full_scope_string<B: SlotBackend>(
    store: &mut CatalogStore<B>,
    scope_name: &str,
    full_scope_string: &str,
) -> Result<CmdResult> {
    let scope_name = scope_name.trim();
    let mut result = CmdResult::default();

    if require_scope(store, scope_name, &mut result).is_none() {
        return Ok(result);
    }

    let outcome = store.set_full_scope_string(scope_name, full_scope_string);
    if let Some(mutation) = record_mutation(&mut result, outcome)? {
        let message = format!(
            "Full scope string of '{}' set to '{}'.",
            scope_name, full_scope_string
        );
        if mutation.changed {
            result.add_message(CmdMessage::success(message));
        } else {
            result.add_message(CmdMessage::info(message));
        }
    }
    Ok(result)
}

pub fn list<B: SlotBackend>(store: &CatalogStore<B>) -> Result<CmdResult> {
    let summaries = store
        .snapshot()
        .scopes()
        .iter()
        .enumerate()
        .map(|(i, scope)| ScopeSummary {
            position: i + 1,
            scope_name: scope.scope_name.clone(),
            full_scope_string: scope.full_scope_string.clone(),
            entry_count: scope.entry_count(),
        })
        .collect();
    Ok(CmdResult::default().with_listed_scopes(summaries))
}

pub fn view<B: SlotBackend>(store: &CatalogStore<B>, scope_name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(scope) = require_scope(store, scope_name, &mut result) {
        let scope = scope.clone();
        return Ok(result.with_viewed_scope(scope));
    }
    Ok(result)
}
