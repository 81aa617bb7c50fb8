//! Tree formatter
//!
//! `TreeFormatter` renders a built `TreeNode` tree into the classic
//! connector-drawn text form, either as a plain string or with colors
//! on stdout. Rendering is purely structural and never touches the
//! filesystem.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;

/// Formatter for built trees.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree to a string. `None` renders as the empty string.
    pub fn format(&self, tree: Option<&TreeNode>) -> String {
        let Some(node) = tree else {
            return String::new();
        };
        let mut lines = Vec::new();
        self.format_node(node, "", true, &mut lines);
        lines.join("\n")
    }

    /// Print the tree to stdout, colored when the config allows it.
    pub fn print(&self, tree: Option<&TreeNode>) -> io::Result<()> {
        let Some(node) = tree else {
            return Ok(());
        };
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.print_node(node, &mut stdout, "", true)
    }

    fn format_node(&self, node: &TreeNode, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
        // The root is rendered as a last child, so it gets the corner form
        let connector = if is_last { "└── " } else { "├── " };
        let icon = if self.config.show_icons {
            format!("{} ", node.icon())
        } else {
            String::new()
        };
        let path_info = if self.config.show_paths {
            format!(" ({})", node.path().display())
        } else {
            String::new()
        };

        lines.push(format!("{prefix}{connector}{icon}{}{path_info}", node.name()));

        if let Some(children) = node.children() {
            let child_prefix = child_prefix(prefix, is_last);
            for (i, child) in children.iter().enumerate() {
                let child_is_last = i == children.len() - 1;
                self.format_node(child, &child_prefix, child_is_last, lines);
            }
        }
    }

    fn print_node(
        &self,
        node: &TreeNode,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        write!(stdout, "{}{}", prefix, connector)?;
        if self.config.show_icons {
            write!(stdout, "{} ", node.icon())?;
        }

        if node.is_dir() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(stdout, "{}", node.name())?;
        stdout.reset()?;

        if self.config.show_paths {
            write!(stdout, " ({})", node.path().display())?;
        }
        writeln!(stdout)?;

        if let Some(children) = node.children() {
            let child_prefix = child_prefix(prefix, is_last);
            for (i, child) in children.iter().enumerate() {
                let child_is_last = i == children.len() - 1;
                self.print_node(child, stdout, &child_prefix, child_is_last)?;
            }
        }
        Ok(())
    }
}

/// Extend a prefix for the children of a node: blank padding below a closed
/// branch, a continuation bar below a still-open one.
fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
