//! Matches input documents to output destinations.
//!
//! Inputs and outputs are paired positionally. Extra outputs are
//! discarded; when inputs outnumber outputs every remaining input maps to
//! the last output, concatenating several expansions into one file (output
//! files are opened in append mode). An empty output list derives
//! `<input>.exec` names.
//!
//! An output beginning with a single `/` is a wildcard pattern that
//! derives the output name from the input name; see [`match_io`]. A
//! leading `//` escapes the pattern syntax and denotes a literal absolute
//! path with one slash stripped.

use crate::constants::DEFAULT_OUTPUT_EXT;

/// One input document paired with its output destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoPair {
    pub input: String,
    pub output: String,
}

/// Pairs input names with output names, resolving wildcard patterns.
///
/// Pattern syntax is `"/ops arg1 arg2 ..."` where `ops` is a run of
/// single-letter operations (slashes between letters are optional) and the
/// space-separated args line up with the operations in order:
///
/// * `d <dir>` — prepend a directory
/// * `p <prefix>` — prepend to the file name
/// * `s <suffix>` — append after the extension
/// * `S <suffix>` — append to the stem, keeping the extension
/// * `n <name>` — replace the stem, keeping the extension
/// * `e <ext>` — replace the extension (`/` as the arg removes it)
///
/// Operations apply left to right, so `/pe pre ext` both prepends and
/// re-extensions. A pattern with fewer args than operations falls back to
/// `<input>.exec`.
pub fn match_io(inputs: &[String], outputs: &[String]) -> Vec<IoPair> {
    let mut matched: Vec<IoPair> = inputs
        .iter()
        .map(|input| IoPair { input: input.clone(), output: String::new() })
        .collect();

    let Some(fallback) = outputs.last() else {
        for pair in &mut matched {
            pair.output = format!("{}{}", pair.input, DEFAULT_OUTPUT_EXT);
        }
        return matched;
    };

    // extra outputs are dropped; extra inputs share the last output
    for (i, pair) in matched.iter_mut().enumerate() {
        pair.output = outputs.get(i).unwrap_or(fallback).clone();
    }

    for pair in &mut matched {
        if let Some(rest) = pair.output.strip_prefix('/') {
            if let Some(literal) = rest.strip_prefix('/') {
                pair.output = format!("/{literal}");
            } else {
                pair.output = apply_pattern(&pair.output, &pair.input);
            }
        }
    }
    matched
}

fn apply_pattern(pattern: &str, input: &str) -> String {
    let mut parts = pattern.split(' ');
    let ops: Vec<char> =
        parts.next().unwrap_or_default().chars().filter(|c| *c != '/').collect();
    let args: Vec<&str> = parts.collect();

    if args.len() < ops.len() {
        return format!("{input}{DEFAULT_OUTPUT_EXT}");
    }

    let mut name = input.to_string();
    for (op, arg) in ops.iter().zip(&args) {
        name = match op {
            'd' => prepend_dir(&name, arg),
            'p' => prepend_to_file_name(&name, arg),
            'S' => append_to_stem(&name, arg),
            'n' => replace_stem(&name, arg),
            'e' => replace_extension(&name, arg),
            's' => format!("{name}{arg}"),
            _ => name,
        };
    }
    name
}

/// Splits into (directory-with-separator, file name).
fn split_dir_file(name: &str) -> (&str, &str) {
    match name.rfind('/') {
        Some(idx) => (&name[..idx + 1], &name[idx + 1..]),
        None => ("", name),
    }
}

/// Splits a file name into (stem, extension-with-dot). A leading dot alone
/// does not start an extension.
fn split_stem_ext(file: &str) -> (&str, &str) {
    match file.rfind('.') {
        Some(idx) if idx > 0 => (&file[..idx], &file[idx..]),
        _ => (file, ""),
    }
}

fn prepend_dir(name: &str, dir: &str) -> String {
    let mut trimmed = name;
    loop {
        if let Some(rest) = trimmed.strip_prefix("./") {
            trimmed = rest;
        } else if let Some(rest) = trimmed.strip_prefix("../") {
            trimmed = rest;
        } else {
            break;
        }
    }
    let dir = dir.strip_suffix('/').unwrap_or(dir);
    format!("{dir}/{trimmed}")
}

fn prepend_to_file_name(name: &str, prefix: &str) -> String {
    let (dir, file) = split_dir_file(name);
    format!("{dir}{prefix}{file}")
}

fn append_to_stem(name: &str, suffix: &str) -> String {
    let (dir, file) = split_dir_file(name);
    let (stem, ext) = split_stem_ext(file);
    format!("{dir}{stem}{suffix}{ext}")
}

fn replace_stem(name: &str, new_stem: &str) -> String {
    let (dir, file) = split_dir_file(name);
    let (_, ext) = split_stem_ext(file);
    format!("{dir}{new_stem}{ext}")
}

fn replace_extension(name: &str, ext: &str) -> String {
    let ext = if ext == "/" {
        String::new()
    } else if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    };
    let (dir, file) = split_dir_file(name);
    let (stem, _) = split_stem_ext(file);
    format!("{dir}{stem}{ext}")
}
