//! Script files: one command per line.

use std::path::Path;

use tracing::debug;

use crate::board::Board;
use crate::error::{CommandError, CommandResult};

/// How deeply `load-src` may nest before the load is refused.
pub const MAX_SCRIPT_DEPTH: usize = 16;

impl Board {
    /// Run every command in `source`, stopping at the first failure.
    ///
    /// Blank lines, lines starting with `#`, and `help` requests are
    /// skipped. Commands before the failing line stay applied. Returns the
    /// number of commands run.
    pub fn run_source(&mut self, source: &str) -> CommandResult<usize> {
        let mut executed = 0;
        for (index, line) in source.lines().enumerate() {
            match self.execute_line(line) {
                Ok(Some(_)) => executed += 1,
                Ok(None) => {}
                Err(CommandError::HelpRequested(_)) => {
                    debug!(line = index + 1, "skipping help request in script");
                }
                Err(e) => {
                    return Err(CommandError::Script {
                        line: index + 1,
                        source: Box::new(e),
                    })
                }
            }
        }
        Ok(executed)
    }

    /// Read and run the script at `path`.
    pub fn load_source(&mut self, path: &Path) -> CommandResult<usize> {
        if self.script_depth >= MAX_SCRIPT_DEPTH {
            return Err(CommandError::invalid(
                "load-src",
                format!("scripts nested more than {MAX_SCRIPT_DEPTH} deep"),
            ));
        }
        let source = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), depth = self.script_depth, "loading script");

        self.script_depth += 1;
        let result = self.run_source(&source);
        self.script_depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use planar_types::{Category, ObjectId};
    use std::io::Write;

    fn board() -> Board {
        Board::new(BoardConfig {
            seed: Some(11),
            ..BoardConfig::default()
        })
    }

    #[test]
    fn runs_commands_and_skips_comments() {
        let mut b = board();
        let n = b
            .run_source("# triangle\n\ncreate point 0 0 as A\ncreate point 3 0 as B\n  \nmidpoint A B as M\n")
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(b.objects().count(Category::Point), 3);
    }

    #[test]
    fn help_lines_do_not_abort() {
        let mut b = board();
        let n = b
            .run_source("create point 0 0 as A\nhelp\ncreate help\ncreate point 1 1 as B\n")
            .unwrap();
        assert_eq!(n, 2);
        assert!(b.lookup_any(ObjectId::from_name("B")).is_ok());
    }

    #[test]
    fn first_failure_aborts_with_line_number() {
        let mut b = board();
        let err = b
            .run_source("create point 0 0 as A\n\nmidpoint A Z\ncreate point 1 1 as B\n")
            .unwrap_err();
        match err {
            CommandError::Script { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(*source, CommandError::ObjectNotFound { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(b.lookup_any(ObjectId::from_name("A")).is_ok());
        assert!(b.lookup_any(ObjectId::from_name("B")).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "create point 1 1 as A").unwrap();
        writeln!(file, "create point 5 1 as B").unwrap();
        writeln!(file, "create seg A B as S").unwrap();

        let mut b = board();
        assert_eq!(b.load_source(file.path()).unwrap(), 3);
        assert!(b.lookup(Category::Line, ObjectId::from_name("S")).is_ok());
    }

    #[test]
    fn load_src_command_runs_nested_script() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner.src");
        std::fs::write(&inner, "create point 2 2 as P\n").unwrap();

        let mut b = board();
        let outer = format!("load-src {}\ninfo P\n", inner.display());
        assert_eq!(b.run_source(&outer).unwrap(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = board();
        let err = b.load_source(&dir.path().join("nope.src")).unwrap_err();
        assert!(matches!(err, CommandError::Io { .. }));
    }

    #[test]
    fn self_including_script_is_cut_off() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loop.src");
        std::fs::write(&path, format!("load-src {}\n", path.display())).unwrap();

        let mut b = board();
        let mut err = b.load_source(&path).unwrap_err();
        let mut depth = 0;
        while let CommandError::Script { source, .. } = err {
            err = *source;
            depth += 1;
        }
        assert_eq!(depth, MAX_SCRIPT_DEPTH);
        assert!(matches!(err, CommandError::InvalidArgument { .. }));
        assert_eq!(b.script_depth, 0);
    }
}
