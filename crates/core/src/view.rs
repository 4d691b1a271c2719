//! Pure rendering of the command list.
//!
//! Commands and their statuses are projected into [`ItemView`]s, which the
//! front-ends draw, and into a [`ViewNode`] tree mirroring the markup of the
//! web page:
//!
//! ```text
//! ul#list
//! └─ li.item[data-name]
//!    ├─ span.name
//!    ├─ span.memo
//!    ├─ span.status(.status-inflight|.status-done|.status-error)
//!    └─ ul.programs
//!       └─ li.program > span.line-content
//! ```

use std::fmt::{Display, Formatter};

use crate::command_definitions::Command;
use crate::registry::StatusRegistry;
use crate::status::Status;

/// Attribute holding the command name on each item
pub const NAME_ATTRIBUTE: &str = "data-name";

/// Everything a front-end needs to draw one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub name: String,
    pub memo: String,
    pub program_lines: Vec<String>,
    pub status: Status,
    pub output: bool,
}

impl ItemView {
    pub fn new(command: &Command, status: Status) -> Self {
        Self {
            name: command.name.clone(),
            memo: command.memo.clone(),
            program_lines: command.program_lines(),
            status,
            output: command.output,
        }
    }

    pub fn to_node(&self) -> ViewNode {
        let mut status_node = ViewNode::new("span").with_class("status");
        if let Some(marker) = self.status.marker_class() {
            status_node = status_node.with_class(marker);
        }

        let programs = self.program_lines.iter().fold(
            ViewNode::new("ul").with_class("programs"),
            |programs, line| {
                programs.with_child(
                    ViewNode::new("li")
                        .with_class("program")
                        .with_child(ViewNode::new("span").with_class("line-content").with_text(line)),
                )
            },
        );

        ViewNode::new("li")
            .with_class("item")
            .with_attribute(NAME_ATTRIBUTE, &self.name)
            .with_child(ViewNode::new("span").with_class("name").with_text(&self.name))
            .with_child(ViewNode::new("span").with_class("memo").with_text(&self.memo))
            .with_child(status_node)
            .with_child(programs)
    }
}

/// Builds the item views for `commands` in list order.
pub fn item_views(commands: &[Command], registry: &StatusRegistry) -> Vec<ItemView> {
    commands
        .iter()
        .map(|command| ItemView::new(command, registry.status_of(&command.name)))
        .collect()
}

/// Renders the whole list container.
pub fn render_list(commands: &[Command], registry: &StatusRegistry) -> ViewNode {
    item_views(commands, registry)
        .iter()
        .fold(ViewNode::new("ul").with_id("list"), |list, item| {
            list.with_child(item.to_node())
        })
}

/// A structural element of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<&'static str>,
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, value: &str) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First descendant (depth first, self included) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&ViewNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    /// Every descendant (depth first, self included) carrying `class`.
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a ViewNode> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a ViewNode>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, found);
        }
    }

    /// Text of the first descendant carrying `class`.
    pub fn text_of(&self, class: &str) -> Option<&str> {
        self.find_by_class(class)
            .and_then(|node| node.text.as_deref())
    }

    fn write_markup(&self, f: &mut Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{indent}<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", escape(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes.join(" "))?;
        }
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", escape(value))?;
        }
        f.write_str(">")?;

        if self.children.is_empty() {
            if let Some(text) = &self.text {
                f.write_str(&escape(text))?;
            }
            return writeln!(f, "</{}>", self.tag);
        }

        writeln!(f)?;
        if let Some(text) = &self.text {
            writeln!(f, "{indent}  {}", escape(text))?;
        }
        for child in &self.children {
            child.write_markup(f, depth + 1)?;
        }
        writeln!(f, "{indent}</{}>", self.tag)
    }
}

impl Display for ViewNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_markup(f, 0)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, memo: &str, programs: &[&[&str]]) -> Command {
        Command {
            name: name.to_string(),
            memo: memo.to_string(),
            programs: programs
                .iter()
                .map(|program| program.iter().map(ToString::to_string).collect())
                .collect(),
            output: false,
        }
    }

    #[test]
    fn test_render_single_build_command() {
        let commands = vec![command("build", "Build it", &[&["make", "all"]])];
        let registry = StatusRegistry::from_commands(&commands);

        let list = render_list(&commands, &registry);
        assert_eq!(list.id.as_deref(), Some("list"));
        assert_eq!(list.children.len(), 1);

        let item = &list.children[0];
        assert!(item.has_class("item"));
        assert_eq!(item.attribute(NAME_ATTRIBUTE), Some("build"));
        assert_eq!(item.text_of("name"), Some("build"));
        assert_eq!(item.text_of("memo"), Some("Build it"));

        let programs = item.find_all_by_class("program");
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].text_of("line-content"), Some("make all"));
    }

    #[test]
    fn test_render_keeps_response_order_and_program_counts() {
        let commands = vec![
            command("zeta", "last", &[&["a"], &["b"], &["c"]]),
            command("alpha", "first", &[]),
            command("mid", "middle", &[&["x", "y"]]),
        ];
        let registry = StatusRegistry::from_commands(&commands);

        let list = render_list(&commands, &registry);
        let items = list.find_all_by_class("item");
        assert_eq!(items.len(), 3);

        let names: Vec<_> = items.iter().map(|item| item.attribute(NAME_ATTRIBUTE).unwrap()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);

        let program_counts: Vec<_> = items
            .iter()
            .map(|item| item.find_all_by_class("program").len())
            .collect();
        assert_eq!(program_counts, vec![3, 0, 1]);
    }

    #[test]
    fn test_status_marker_projection() {
        let commands = vec![command("a", "", &[]), command("b", "", &[]), command("c", "", &[])];
        let mut registry = StatusRegistry::from_commands(&commands);
        registry.set("a", Status::InFlight);
        registry.set("b", Status::Error);

        let list = render_list(&commands, &registry);
        let statuses = list.find_all_by_class("status");
        assert_eq!(statuses.len(), 3);

        assert!(statuses[0].has_class("status-inflight"));
        assert!(statuses[1].has_class("status-error"));
        for marker in Status::MARKER_CLASSES {
            assert!(!statuses[2].has_class(marker));
        }
    }

    #[test]
    fn test_markup_escapes_text() {
        let commands = vec![command("quote", "a < b & \"c\"", &[&["echo", "<x>"]])];
        let registry = StatusRegistry::from_commands(&commands);

        let markup = render_list(&commands, &registry).to_string();
        assert!(markup.starts_with("<ul id=\"list\">"));
        assert!(markup.contains("<li class=\"item\" data-name=\"quote\">"));
        assert!(markup.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(markup.contains("<span class=\"line-content\">echo &lt;x&gt;</span>"));
    }

    #[test]
    fn test_item_views_read_registry() {
        let commands = vec![command("a", "memo", &[&["ls", "-la"]])];
        let mut registry = StatusRegistry::from_commands(&commands);
        registry.set("a", Status::Done);

        let views = item_views(&commands, &registry);
        assert_eq!(
            views,
            vec![ItemView {
                name: "a".to_string(),
                memo: "memo".to_string(),
                program_lines: vec!["ls -la".to_string()],
                status: Status::Done,
                output: false,
            }]
        );
    }
}
