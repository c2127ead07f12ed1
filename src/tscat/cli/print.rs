use colored::Colorize;
use tscat::api::{CmdMessage, MessageLevel, ScopeSummary};
use tscat::model::Scope;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_scope_list(scopes: &[ScopeSummary]) -> String {
    if scopes.is_empty() {
        return "No scopes found.\n".to_string();
    }

    let mut output = String::new();
    for summary in scopes {
        let idx = format!("{:>4}", format!("{}. ", summary.position));
        let name = truncate_to_width(&summary.scope_name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let fss = if summary.full_scope_string.is_empty() {
            "-".to_string()
        } else {
            summary.full_scope_string.clone()
        };
        let count = match summary.entry_count {
            1 => "1 string".to_string(),
            n => format!("{} strings", n),
        };
        output.push_str(&format!(
            "  {}{}{}  {}  {}\n",
            idx.yellow(),
            name.bold(),
            " ".repeat(padding),
            fss,
            count.dimmed()
        ));
    }
    output
}

/// `en { "id" : "value" }` per language bucket, under a header naming the scope.
pub(super) fn render_scope(scope: &Scope) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", scope.scope_name.bold()));
    if !scope.full_scope_string.is_empty() {
        output.push_str(&format!("{}\n", scope.full_scope_string.dimmed()));
    }
    output.push_str("--------------------------------\n");

    for bucket in &scope.languages {
        if bucket.entries.is_empty() {
            output.push_str(&format!("{} {{ }}\n", bucket.language));
            continue;
        }
        output.push_str(&format!("{} {{\n", bucket.language));
        for entry in &bucket.entries {
            output.push_str(&format!(
                "  \"{}\" : \"{}\"\n",
                entry.id.yellow(),
                entry.default_value
            ));
        }
        output.push_str("}\n");
    }
    output
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
