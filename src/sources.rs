//! Source file discovery and loading.
//!
//! Files are found by walking a root directory recursively and keeping the regular
//! files with a given extension. Reading a file is the caller's job; the parser
//! itself never touches the file system.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::ast::ClassDeclaration;
use crate::error::{JformatError, JformatResult};
use crate::parser::parse;

/// Default extension of the sources handed to the parser
pub const DEFAULT_EXTENSION: &str = "java";

/// Every file under `root` whose extension is `extension`
///
/// Paths are absolute, sorted and free of duplicates. A `root` that is itself a
/// matching file yields just that file.
pub fn collect_sources(root: impl AsRef<Path>, extension: &str) -> io::Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().map(|e| e == extension).unwrap_or(false) {
            paths.push(fs::canonicalize(path)?);
        }
    }

    paths.sort();
    paths.dedup();
    debug!("found {} .{} files under {}", paths.len(), extension, root.display());
    Ok(paths)
}

/// A source unit and its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn load(path: impl Into<PathBuf>) -> JformatResult<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)
            .map_err(|e| JformatError::Io(format!("{}: {}", path.display(), e)))?;
        Ok(Self { path, text })
    }
}

/// Parse the first top-level declaration of a loaded source file
pub fn parse_source_file(source: &SourceFile) -> JformatResult<ClassDeclaration> {
    debug!("parsing {}", source.path.display());
    parse(&source.text)
}
