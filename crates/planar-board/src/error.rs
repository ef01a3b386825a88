use std::path::PathBuf;

use planar_types::Category;
use thiserror::Error;

/// Errors from parsing and running commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command was given no arguments at all, or an option was given
    /// without its value.
    #[error("{command}: no argument given")]
    MissingArgument { command: String },

    /// Fewer positional arguments than the command needs.
    #[error("{command}: not enough arguments")]
    NotEnoughArguments { command: String },

    /// A malformed number, color, flag, or name, or an unknown object type.
    #[error("invalid {what}: {reason}")]
    InvalidArgument { what: String, reason: String },

    /// A token the command does not accept.
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    /// A name that does not resolve, in `category` when one is expected.
    #[error("{} not found: {name}", .category.map_or("object".to_string(), |c| c.to_string()))]
    ObjectNotFound {
        category: Option<Category>,
        name: String,
    },

    /// The first token is not a command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Usage text was asked for. Not a failure.
    #[error("{0}")]
    HelpRequested(String),

    /// A script file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A script line failed; the remaining lines were not run.
    #[error("line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<CommandError>,
    },

    /// The configuration file is unreadable or invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Error from the point graph.
    #[error("graph error: {0}")]
    Graph(#[from] planar_graph::GraphError),

    /// Error from the object registry other than a lookup miss.
    #[error("registry error: {0}")]
    Registry(planar_registry::RegistryError),
}

impl CommandError {
    pub(crate) fn missing(command: &str) -> Self {
        Self::MissingArgument {
            command: command.to_string(),
        }
    }

    pub(crate) fn not_enough(command: &str) -> Self {
        Self::NotEnoughArguments {
            command: command.to_string(),
        }
    }

    pub(crate) fn invalid(what: &str, reason: impl ToString) -> Self {
        Self::InvalidArgument {
            what: what.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` for [`CommandError::HelpRequested`], which carries usage
    /// text rather than a failure.
    pub fn is_help(&self) -> bool {
        matches!(self, Self::HelpRequested(_))
    }
}

impl From<planar_registry::RegistryError> for CommandError {
    fn from(err: planar_registry::RegistryError) -> Self {
        use planar_registry::RegistryError;
        match err {
            RegistryError::NotFound { category, id } => Self::ObjectNotFound {
                category: Some(category),
                name: id.name(),
            },
            RegistryError::NotFoundAnywhere(id) => Self::ObjectNotFound {
                category: None,
                name: id.name(),
            },
            other => Self::Registry(other),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use planar_registry::RegistryError;
    use planar_types::ObjectId;

    #[test]
    fn not_found_maps_to_object_not_found() {
        let err: CommandError = RegistryError::NotFound {
            category: Category::Point,
            id: ObjectId::from_name("P9"),
        }
        .into();
        assert_eq!(err.to_string(), "point not found: P9");
    }

    #[test]
    fn not_found_anywhere_says_object() {
        let err: CommandError = RegistryError::NotFoundAnywhere(ObjectId::from_name("q")).into();
        assert_eq!(err.to_string(), "object not found: q");
    }

    #[test]
    fn script_errors_carry_line() {
        let err = CommandError::Script {
            line: 3,
            source: Box::new(CommandError::UnknownCommand("frob".into())),
        };
        assert_eq!(err.to_string(), "line 3: unknown command: frob");
    }

    #[test]
    fn help_is_not_a_failure() {
        assert!(CommandError::HelpRequested("usage".into()).is_help());
        assert!(!CommandError::missing("create").is_help());
    }
}
