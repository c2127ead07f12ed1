use crate::commands::helpers::require_scope;
use crate::commands::{CmdMessage, CmdResult};
use crate::compose::{ComposeStyle, ExportFormat};
use crate::error::Result;
use crate::sink::{copy_to_clipboard, download_to_file};
use crate::store::{CatalogStore, SlotBackend};
use std::path::Path;

/// Composes the scope in `format` and returns the text on the result.
pub fn compose<B: SlotBackend>(
    store: &CatalogStore<B>,
    scope_name: &str,
    format: ExportFormat,
    style: ComposeStyle,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match require_scope(store, scope_name, &mut result) {
        Some(scope) => {
            let text = format.compose(Some(scope), style);
            Ok(result.with_composed(format, text))
        }
        None => Ok(result),
    }
}

pub fn copy<B: SlotBackend>(
    store: &CatalogStore<B>,
    scope_name: &str,
    format: ExportFormat,
    style: ComposeStyle,
) -> Result<CmdResult> {
    let mut result = compose(store, scope_name, format, style)?;
    let Some(composed) = result.composed.clone() else {
        return Ok(result);
    };

    copy_to_clipboard(&composed.text, |_| {
        result.add_message(CmdMessage::success(format!(
            "Copied to {} format successfully",
            format.filename()
        )));
    })?;
    Ok(result)
}

pub fn download<B: SlotBackend>(
    store: &CatalogStore<B>,
    scope_name: &str,
    format: ExportFormat,
    style: ComposeStyle,
    dir: &Path,
) -> Result<CmdResult> {
    let result = compose(store, scope_name, format, style)?;
    let Some(composed) = result.composed.clone() else {
        return Ok(result);
    };

    let path = download_to_file(&composed.text, format.filename(), dir)?;
    let mut result = result.with_written_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Saved {} to {}",
        format.filename(),
        path.display()
    )));
    Ok(result)
}
