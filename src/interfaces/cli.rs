use thiserror::Error;

/// Command-line usage text
pub const USAGE: &str = "Usage: trash-view [list | restore <id> | purge <id> [--yes] | watch]";

/// Error types for command-line parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing document id for `{0}`")]
    MissingId(&'static str),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Restore { id: String },
    Purge { id: String, assume_yes: bool },
    Watch,
}

/// Parses the arguments after the program name
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);

    let command = match args.next().as_deref() {
        None | Some("list") => Command::List,
        Some("watch") => Command::Watch,
        Some("restore") => {
            let id = args.next().ok_or(CliError::MissingId("restore"))?;
            Command::Restore { id }
        }
        Some("purge") => {
            let mut id = None;
            let mut assume_yes = false;
            for arg in args.by_ref() {
                if arg == "--yes" || arg == "-y" {
                    assume_yes = true;
                } else if id.is_none() {
                    id = Some(arg);
                } else {
                    return Err(CliError::UnexpectedArgument(arg));
                }
            }
            let id = id.ok_or(CliError::MissingId("purge"))?;
            Command::Purge { id, assume_yes }
        }
        Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = args.next() {
        return Err(CliError::UnexpectedArgument(extra));
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_list() {
        assert_eq!(parse_args(Vec::<String>::new()), Ok(Command::List));
        assert_eq!(parse_args(["list"]), Ok(Command::List));
    }

    #[test]
    fn test_restore_requires_id() {
        assert_eq!(
            parse_args(["restore", "doc-1"]),
            Ok(Command::Restore { id: "doc-1".to_string() })
        );
        assert_eq!(parse_args(["restore"]), Err(CliError::MissingId("restore")));
    }

    #[test]
    fn test_purge_flag_in_any_position() {
        let expected = Ok(Command::Purge { id: "doc-1".to_string(), assume_yes: true });

        assert_eq!(parse_args(["purge", "doc-1", "--yes"]), expected);
        assert_eq!(parse_args(["purge", "-y", "doc-1"]), expected);
        assert_eq!(
            parse_args(["purge", "doc-1"]),
            Ok(Command::Purge { id: "doc-1".to_string(), assume_yes: false })
        );
    }

    #[test]
    fn test_rejects_unknown_and_extra_arguments() {
        assert_eq!(parse_args(["empty"]), Err(CliError::UnknownCommand("empty".to_string())));
        assert_eq!(
            parse_args(["restore", "a", "b"]),
            Err(CliError::UnexpectedArgument("b".to_string()))
        );
        assert_eq!(
            parse_args(["purge", "a", "b"]),
            Err(CliError::UnexpectedArgument("b".to_string()))
        );
    }
}
