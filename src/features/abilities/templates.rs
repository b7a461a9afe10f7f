//! Roll template and button markup
//!
//! Everything here produces chat markup understood by the host: the `desc`
//! roll template envelope and the two kinds of clickable buttons.

/// A titled group of pre-rendered buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonGroup {
    pub title: String,
    pub content: String,
}

/// Main menu envelope: bold title, line break, content
pub fn render_main(title: &str, content: &str) -> String {
    format!("&{{template:desc}} {{{{desc=**{title}**<br>{content}}}}}")
}

/// Per-category envelope
///
/// The skills group is skipped entirely when it has no buttons; the basics
/// group always closes the message.
pub fn render_checks(title: &str, skills: &ButtonGroup, basic: &ButtonGroup) -> String {
    let mut template = format!("&{{template:desc}} {{{{desc=**{title}**<br>");
    if !skills.content.is_empty() {
        template.push_str(&format!("{}<br>{}<br>", skills.title, skills.content));
    }
    template.push_str(&format!("{}<br>{}}}}}", basic.title, basic.content));
    template
}

/// Button that runs the sheet ability `ability` on character `character_id`
pub fn macro_button(label: &str, character_id: &str, ability: &str) -> String {
    format!("[{label}](~{character_id}|{ability})")
}

/// Button that re-invokes this script as `!<command> -<argument>`
pub fn command_button(label: &str, command: &str, argument: &str) -> String {
    format!("[{label}](!{command} -{argument})")
}
