//! Status formatter — tool invocation to human-readable phrase.
//!
//! Total mapping from `(tool_name, args)` to a short present-participle
//! phrase. Every branch has an explicit default so malformed or partially
//! streamed argument bags degrade to a generic phrase instead of failing.

use crate::invocation::ToolArgs;

/// Shown when a path is missing or yields no file name.
const FALLBACK_FILE: &str = "file";

/// Commands of the text-editor tool, with an explicit unknown fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Create,
    StrReplace,
    Insert,
    View,
    UndoEdit,
    Other,
}

impl EditorCommand {
    fn parse(command: Option<&str>) -> Self {
        match command {
            Some("create") => Self::Create,
            Some("str_replace") => Self::StrReplace,
            Some("insert") => Self::Insert,
            Some("view") => Self::View,
            Some("undo_edit") => Self::UndoEdit,
            _ => Self::Other,
        }
    }
}

/// Commands of the file-manager tool, with an explicit unknown fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileManagerCommand {
    Rename,
    Delete,
    Other,
}

impl FileManagerCommand {
    fn parse(command: Option<&str>) -> Self {
        match command {
            Some("rename") => Self::Rename,
            Some("delete") => Self::Delete,
            _ => Self::Other,
        }
    }
}

/// First-level dispatch over the tool name.
///
/// The tool-name set is open ended; anything unrecognized keeps the raw
/// name so the generic phrase can still mention it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolAction {
    Editor(EditorCommand),
    FileManager(FileManagerCommand),
    Other(String),
}

impl ToolAction {
    pub fn classify(tool_name: &str, command: Option<&str>) -> Self {
        match tool_name {
            "str_replace_editor" => Self::Editor(EditorCommand::parse(command)),
            "file_manager" => Self::FileManager(FileManagerCommand::parse(command)),
            other => Self::Other(other.to_string()),
        }
    }
}

/// Last `/`-delimited segment of a path after stripping every leading `/`.
///
/// `""`, `"/"` and paths whose final segment is empty (trailing slash) all
/// fall back to the literal word "file".
pub fn extract_file_name(path: &str) -> &str {
    let stripped = path.trim_start_matches('/');
    match stripped.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => FALLBACK_FILE,
    }
}

fn file_name(path: Option<&str>) -> &str {
    path.map(extract_file_name).unwrap_or(FALLBACK_FILE)
}

/// Format the status phrase for a tool invocation.
///
/// Total function: every input yields a non-empty phrase.
pub fn format_status(tool_name: &str, args: &ToolArgs) -> String {
    let command = args.command.as_deref();
    let file = file_name(args.path.as_deref());
    match ToolAction::classify(tool_name, command) {
        ToolAction::Editor(cmd) => match cmd {
            EditorCommand::Create => format!("Creating {}", file),
            EditorCommand::StrReplace => format!("Editing {}", file),
            EditorCommand::Insert => format!("Inserting text in {}", file),
            EditorCommand::View => format!("Viewing {}", file),
            EditorCommand::UndoEdit => format!("Undoing changes in {}", file),
            EditorCommand::Other => {
                tracing::trace!(command = ?command, "unrecognized editor command");
                format!("Modifying {}", file)
            }
        },
        ToolAction::FileManager(cmd) => match cmd {
            FileManagerCommand::Rename => {
                format!("Renaming {} to {}", file, file_name(args.new_path.as_deref()))
            }
            FileManagerCommand::Delete => format!("Deleting {}", file),
            FileManagerCommand::Other => {
                tracing::trace!(command = ?command, "unrecognized file_manager command");
                format!("Managing {}", file)
            }
        },
        ToolAction::Other(name) => {
            tracing::trace!(tool = %name, "no dedicated phrase for tool");
            format!("Running {}", name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(command: Option<&str>, path: Option<&str>, new_path: Option<&str>) -> ToolArgs {
        ToolArgs {
            command: command.map(str::to_string),
            path: path.map(str::to_string),
            new_path: new_path.map(str::to_string),
            ..ToolArgs::default()
        }
    }

    #[test]
    fn test_extract_file_name_basic() {
        assert_eq!(extract_file_name("App.jsx"), "App.jsx");
        assert_eq!(extract_file_name("/App.jsx"), "App.jsx");
        assert_eq!(extract_file_name("/src/a/Button.tsx"), "Button.tsx");
    }

    #[test]
    fn test_extract_file_name_repeated_slashes() {
        // Leading slashes are all consumed; internal ones still delimit.
        assert_eq!(extract_file_name("///a//b/c.txt"), "c.txt");
        assert_eq!(extract_file_name("a/b/c.txt"), "c.txt");
    }

    #[test]
    fn test_extract_file_name_fallbacks() {
        assert_eq!(extract_file_name(""), "file");
        assert_eq!(extract_file_name("/"), "file");
        assert_eq!(extract_file_name("///"), "file");
        assert_eq!(extract_file_name("/src/"), "file");
    }

    #[test]
    fn test_editor_commands() {
        let cases = [
            ("create", "Creating App.jsx"),
            ("str_replace", "Editing App.jsx"),
            ("insert", "Inserting text in App.jsx"),
            ("view", "Viewing App.jsx"),
            ("undo_edit", "Undoing changes in App.jsx"),
        ];
        for (command, expected) in cases {
            let phrase = format_status(
                "str_replace_editor",
                &args(Some(command), Some("/App.jsx"), None),
            );
            assert_eq!(phrase, expected);
        }
    }

    #[test]
    fn test_editor_unknown_command_falls_back() {
        let phrase = format_status(
            "str_replace_editor",
            &args(Some("rewrite"), Some("/App.jsx"), None),
        );
        assert_eq!(phrase, "Modifying App.jsx");
    }

    #[test]
    fn test_editor_empty_args_all_defaults() {
        let phrase = format_status("str_replace_editor", &ToolArgs::default());
        assert_eq!(phrase, "Modifying file");
    }

    #[test]
    fn test_file_manager_rename() {
        let phrase = format_status(
            "file_manager",
            &args(Some("rename"), Some("/old.jsx"), Some("/components/new.jsx")),
        );
        assert_eq!(phrase, "Renaming old.jsx to new.jsx");
    }

    #[test]
    fn test_file_manager_rename_missing_new_path() {
        let phrase = format_status("file_manager", &args(Some("rename"), Some("/old.jsx"), None));
        assert_eq!(phrase, "Renaming old.jsx to file");
    }

    #[test]
    fn test_file_manager_delete() {
        let phrase = format_status("file_manager", &args(Some("delete"), Some("/tmp.jsx"), None));
        assert_eq!(phrase, "Deleting tmp.jsx");
    }

    #[test]
    fn test_file_manager_unknown_command_falls_back() {
        let phrase = format_status("file_manager", &args(Some("chmod"), Some("/a.txt"), None));
        assert_eq!(phrase, "Managing a.txt");
        let phrase = format_status("file_manager", &ToolArgs::default());
        assert_eq!(phrase, "Managing file");
    }

    #[test]
    fn test_unknown_tool_runs_generic_phrase() {
        let phrase = format_status("unknown_tool", &ToolArgs::default());
        assert_eq!(phrase, "Running unknown_tool");
        // The argument bag is ignored entirely for unrecognized tools.
        let phrase = format_status("web_search", &args(Some("create"), Some("/x.rs"), None));
        assert_eq!(phrase, "Running web_search");
    }

    #[test]
    fn test_format_status_never_empty() {
        let inputs = [
            ("", None, None),
            ("str_replace_editor", None, None),
            ("file_manager", Some(""), Some("")),
        ];
        for (tool, command, path) in inputs {
            assert!(!format_status(tool, &args(command, path, None)).is_empty());
        }
    }

    #[test]
    fn test_format_status_idempotent() {
        let a = args(Some("create"), Some("/App.jsx"), None);
        assert_eq!(
            format_status("str_replace_editor", &a),
            format_status("str_replace_editor", &a)
        );
    }

    #[test]
    fn test_classify_variants() {
        assert_eq!(
            ToolAction::classify("str_replace_editor", Some("view")),
            ToolAction::Editor(EditorCommand::View)
        );
        assert_eq!(
            ToolAction::classify("file_manager", Some("delete")),
            ToolAction::FileManager(FileManagerCommand::Delete)
        );
        assert_eq!(
            ToolAction::classify("bash", Some("view")),
            ToolAction::Other("bash".to_string())
        );
    }
}
