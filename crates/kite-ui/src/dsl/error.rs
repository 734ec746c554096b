use std::fmt;

/// Failure turning a parsed `.kml` document into widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Node name is neither a registered widget nor a component alias.
    UnknownWidget { name: String, line: usize, col: usize },
    /// `import "path" as Alias` with no component registered under `Alias`.
    MissingImport { alias: String, path: String },
    /// Property present but of the wrong value kind.
    PropType {
        widget: String,
        key: String,
        expected: &'static str,
        found: &'static str,
        line: usize,
        col: usize,
    },
    /// Property of the right kind with an unacceptable value.
    PropValue { widget: String, key: String, message: String, line: usize, col: usize },
    /// Component expansion nested too deeply (usually a component that
    /// includes itself).
    RecursionLimit { alias: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnknownWidget { name, line, col } => {
                write!(f, "{line}:{col}: unknown widget `{name}`")
            }
            BuildError::MissingImport { alias, path } => {
                write!(f, "import `{alias}` (\"{path}\") is not a registered component")
            }
            BuildError::PropType { widget, key, expected, found, line, col } => write!(
                f,
                "{line}:{col}: `{widget}.{key}` expects a {expected}, found a {found}"
            ),
            BuildError::PropValue { widget, key, message, line, col } => {
                write!(f, "{line}:{col}: `{widget}.{key}`: {message}")
            }
            BuildError::RecursionLimit { alias } => {
                write!(f, "component `{alias}` nests too deeply (does it include itself?)")
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_position() {
        let e = BuildError::PropType {
            widget: "Diamond".into(),
            key: "width".into(),
            expected: "number",
            found: "string",
            line: 3,
            col: 14,
        };
        assert_eq!(e.to_string(), "3:14: `Diamond.width` expects a number, found a string");
    }
}
