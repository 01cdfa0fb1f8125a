use std::fs::OpenOptions;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::Path;

use crate::constants::STDIO_INDICATOR;
use crate::error::{Error, Result};

/// Reads one input document from a file, or from stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == STDIO_INDICATOR {
        return read_stdin();
    }
    std::fs::read_to_string(path)
        .map_err(|source| Error::InputReadError { path: path.to_string(), source })
}

fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return read_interactive(stdin);
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .map_err(|source| Error::InputReadError { path: "stdin".to_string(), source })?;
    Ok(buf)
}

/// Line-by-line stdin read for templates typed at a terminal.
///
/// Prompts go to stderr so they never mix into expanded output; end the
/// document with EOF (ctrl-d).
fn read_interactive(stdin: io::Stdin) -> Result<String> {
    let mut data = String::new();
    eprint!(">> ");
    for line in stdin.lock().lines() {
        let line = line.map_err(|source| Error::InputReadError {
            path: "stdin".to_string(),
            source,
        })?;
        data.push_str(&line);
        data.push('\n');
        eprint!(">> ");
    }
    eprintln!();
    Ok(data)
}

/// Opens one output destination: stdout when `path` is `-`, otherwise the
/// named file in append-create mode with missing parent directories made.
pub fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == STDIO_INDICATOR {
        return Ok(Box::new(io::stdout()));
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::OutputOpenError {
                path: path.to_string(),
                source,
            })?;
        }
    }
    let file = OpenOptions::new().append(true).create(true).open(path).map_err(
        |source| Error::OutputOpenError { path: path.to_string(), source },
    )?;
    Ok(Box::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_input_returns_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.tpl");
        std::fs::write(&path, "contents").unwrap();
        assert_eq!(read_input(path.to_str().unwrap()).unwrap(), "contents");
    }

    #[test]
    fn read_input_missing_file_is_an_error() {
        let result = read_input("definitely/not/here.tpl");
        assert!(matches!(result, Err(Error::InputReadError { .. })));
    }

    #[test]
    fn open_output_appends_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let path = path.to_str().unwrap();

        open_output(path).unwrap().write_all(b"first\n").unwrap();
        open_output(path).unwrap().write_all(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_output_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/out.txt");
        let path = path.to_str().unwrap();

        open_output(path).unwrap().write_all(b"x").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x");
    }
}
