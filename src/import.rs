use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cli::ImportArgs;
use crate::config::Config;
use crate::error::{JdfError, Result};
use crate::parser;
use crate::rule::Rule;
use crate::targets::TargetDictionary;

/// Outcome of scanning one dictionary file. Read-only once returned.
#[derive(Debug, Default)]
pub struct ImportResult {
    /// Total lines read, including blank and malformed ones.
    pub line_count: usize,
    /// Lines that yielded a valid [`Rule`]. Always equals `accepted.len()`.
    pub record_count: usize,
    /// Parsed rules, in file order.
    pub accepted: Vec<Rule>,
    /// Raw text of lines that did not parse, in file order.
    pub rejected: Vec<String>,
}

impl ImportResult {
    /// True when every line of the file became a rule.
    pub fn is_clean(&self) -> bool {
        self.line_count == self.record_count
    }
}

/// Scan `path` line by line, collecting valid records and rejects.
///
/// A line that fails to parse is routed into `rejected` verbatim and the
/// scan continues; only an I/O failure aborts the import, in which case the
/// partially built result is dropped. A missing file surfaces as
/// [`JdfError::NotFound`] so the caller can word its message accordingly.
pub fn import_file(path: &Path) -> Result<ImportResult> {
    let file = File::open(path).map_err(|e| JdfError::from_io(path.to_path_buf(), e))?;
    let reader = BufReader::new(file);

    let mut result = ImportResult::default();
    for line in reader.lines() {
        let raw = line.map_err(|e| JdfError::from_io(path.to_path_buf(), e))?;
        result.line_count += 1;
        match parser::parse_line(Some(raw.trim())) {
            Ok(rule) => {
                result.accepted.push(rule);
                result.record_count += 1;
            }
            Err(err) => {
                debug!(line = result.line_count, %err, "rejected line");
                result.rejected.push(raw);
            }
        }
    }
    debug!(
        path = %path.display(),
        lines = result.line_count,
        records = result.record_count,
        "import scan complete"
    );
    Ok(result)
}

/// Handler for `jdfconv import`.
pub fn run(args: ImportArgs) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let path: PathBuf = match args.file.or_else(|| config.last_path.clone().map(PathBuf::from)) {
        Some(p) => p,
        None => anyhow::bail!("no dictionary file given and no previous import to fall back to"),
    };

    let target = match &args.target {
        Some(name) => TargetDictionary::from_str(name)?,
        None => config.default_target()?,
    };

    let result = match import_file(&path) {
        Ok(r) => r,
        Err(JdfError::NotFound { path }) => {
            anyhow::bail!("no such dictionary file: {}", path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    if result.is_clean() {
        println!(
            "Imported all {} line(s) into the {} dictionary.",
            result.record_count,
            target.name()
        );
    } else {
        println!(
            "Imported {} of {} line(s) into the {} dictionary; {} line(s) rejected.",
            result.record_count,
            result.line_count,
            target.name(),
            result.rejected.len()
        );
    }

    if args.show_rules {
        for rule in &result.accepted {
            println!("  {}", rule.to_line('.'));
        }
    }
    if args.show_rejected && !result.rejected.is_empty() {
        println!("Rejected lines:");
        for line in &result.rejected {
            println!("  {}", line);
        }
    }

    // Remember the file for the next invocation.
    config.last_path = Some(path.to_string_lossy().to_string());
    config.save().context("failed to save config")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_dict(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn imports_a_clean_file() {
        let dir = tempdir().unwrap();
        let path = write_dict(
            dir.path(),
            "clean.jdf",
            ".cat.kat.*.*.*.*.0.\n,hello,hi,09,*,*,*,1,\n",
        );

        let result = import_file(&path).unwrap();
        assert_eq!(result.line_count, 2);
        assert_eq!(result.record_count, 2);
        assert_eq!(result.accepted.len(), 2);
        assert!(result.rejected.is_empty());
        assert!(result.is_clean());
        assert_eq!(result.accepted[0].in_word, "cat");
        assert_eq!(result.accepted[1].in_word, "hello");
    }

    #[test]
    fn malformed_lines_are_rejected_not_fatal() {
        let dir = tempdir().unwrap();
        let path = write_dict(
            dir.path(),
            "mixed.jdf",
            ".cat.kat.*.*.*.*.0.\nnot a record at all\n.dog.dawg.*.*.*.*.0.\n",
        );

        let result = import_file(&path).unwrap();
        assert_eq!(result.line_count, 3);
        assert_eq!(result.record_count, 2);
        assert_eq!(result.rejected, vec!["not a record at all".to_string()]);
        assert!(!result.is_clean());
    }

    #[test]
    fn counts_partition_the_file() {
        let dir = tempdir().unwrap();
        let mut contents = String::new();
        for i in 0..7 {
            contents.push_str(&format!(".word{i}.say{i}.*.*.*.*.0.\n"));
        }
        contents.push_str("garbage one\n\n; comment-ish line\n");
        let path = write_dict(dir.path(), "ten.jdf", &contents);

        let result = import_file(&path).unwrap();
        assert_eq!(result.line_count, 10);
        assert_eq!(result.record_count, 7);
        assert_eq!(result.accepted.len(), 7);
        assert_eq!(result.rejected.len(), 3);
        assert_eq!(result.record_count + result.rejected.len(), result.line_count);
    }

    #[test]
    fn rejected_lines_keep_their_original_text() {
        let dir = tempdir().unwrap();
        // Leading whitespace is stripped before matching but preserved in
        // the reject collection.
        let path = write_dict(dir.path(), "ws.jdf", "  not a record  \n");

        let result = import_file(&path).unwrap();
        assert_eq!(result.rejected, vec!["  not a record  ".to_string()]);
    }

    #[test]
    fn surrounding_whitespace_does_not_reject_a_valid_record() {
        let dir = tempdir().unwrap();
        let path = write_dict(dir.path(), "padded.jdf", "   .cat.kat.*.*.*.*.0.   \n");

        let result = import_file(&path).unwrap();
        assert_eq!(result.record_count, 1);
        assert_eq!(result.accepted[0].in_word, "cat");
    }

    #[test]
    fn file_order_is_preserved() {
        let dir = tempdir().unwrap();
        let path = write_dict(
            dir.path(),
            "order.jdf",
            ".a.one.*.*.*.*.0.\nbad line b\n.c.three.*.*.*.*.0.\nbad line d\n",
        );

        let result = import_file(&path).unwrap();
        let ins: Vec<&str> = result.accepted.iter().map(|r| r.in_word.as_str()).collect();
        assert_eq!(ins, vec!["a", "c"]);
        assert_eq!(result.rejected, vec!["bad line b", "bad line d"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.jdf");
        match import_file(&path) {
            Err(JdfError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn mid_stream_read_failure_propagates_as_io() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.jdf");
        let mut f = File::create(&path).unwrap();
        // A valid record followed by bytes that are not UTF-8: the scan
        // fails partway through and the partial result is dropped.
        f.write_all(b".cat.kat.*.*.*.*.0.\n\xff\xfe garbage\n").unwrap();
        drop(f);

        match import_file(&path) {
            Err(JdfError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_empty_result() {
        let dir = tempdir().unwrap();
        let path = write_dict(dir.path(), "empty.jdf", "");

        let result = import_file(&path).unwrap();
        assert_eq!(result.line_count, 0);
        assert_eq!(result.record_count, 0);
        assert!(result.is_clean());
    }
}
