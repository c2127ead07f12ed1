use crate::error::{CatalogError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// An external program that reads clipboard contents from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardTool {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    fn copy(&self, text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        // stdin is closed here, so the child sees EOF before we wait on it.
        let status = child.wait()?;
        written?;
        Ok(status.success())
    }
}

const PBCOPY: ClipboardTool = ClipboardTool::new("pbcopy", &[]);
const CLIP: ClipboardTool = ClipboardTool::new("clip", &[]);
const WL_COPY: ClipboardTool = ClipboardTool::new("wl-copy", &[]);
const XCLIP: ClipboardTool = ClipboardTool::new("xclip", &["-selection", "clipboard"]);
const XSEL: ClipboardTool = ClipboardTool::new("xsel", &["--clipboard", "--input"]);

/// Clipboard programs to try, in order, for the given platform.
///
/// Fails when the platform has no clipboard at all, e.g. a Linux session without
/// a Wayland or X11 display.
pub fn clipboard_tools(os: &str, has_wayland: bool, has_x11: bool) -> Result<Vec<ClipboardTool>> {
    match os {
        "macos" => Ok(vec![PBCOPY]),
        "windows" => Ok(vec![CLIP]),
        "linux" | "freebsd" | "openbsd" | "netbsd" => {
            let mut tools = Vec::new();
            if has_wayland {
                tools.push(WL_COPY);
            }
            if has_x11 {
                tools.push(XCLIP);
                tools.push(XSEL);
            }
            if tools.is_empty() {
                return Err(CatalogError::Environment(
                    "clipboard requires a graphical session (DISPLAY or WAYLAND_DISPLAY is not set)"
                        .to_string(),
                ));
            }
            Ok(tools)
        }
        other => Err(CatalogError::Environment(format!(
            "clipboard is not supported on {}",
            other
        ))),
    }
}

fn env_is_set(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}

/// Copies `text` to the system clipboard, calling `on_success` once the write is done.
///
/// Only a missing clipboard facility is an error. A clipboard that exists but refuses
/// the write is ignored: `on_success` is simply not called.
pub fn copy_to_clipboard<F: FnOnce(&str)>(text: &str, on_success: F) -> Result<()> {
    let tools = clipboard_tools(
        std::env::consts::OS,
        env_is_set("WAYLAND_DISPLAY"),
        env_is_set("DISPLAY"),
    )?;

    for tool in &tools {
        match tool.copy(text) {
            Ok(true) => {
                on_success(text);
                return Ok(());
            }
            Ok(false) => {
                debug!(program = tool.program, "clipboard command exited with error");
                return Ok(());
            }
            Err(e) => debug!(program = tool.program, error = %e, "clipboard command unavailable"),
        }
    }
    Ok(())
}
