use std::fs;
use std::path::{Path, PathBuf};

/// Suffix added to the source file stem when saving the HTML fragment.
pub const HTML_SUFFIX: &str = "_x.html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads a markdown source file.
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IoError::NotAFile(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Directory that relative image paths in `source` are resolved against.
pub fn base_dir(source: &Path) -> PathBuf {
    source
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Where the HTML fragment for `source` is saved: `<stem>_x.html`, next to
/// the source unless `out_dir` is given.
pub fn html_output_path(source: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "article".to_string());
    let dir = out_dir.map(Path::to_path_buf).unwrap_or_else(|| base_dir(source));
    dir.join(format!("{stem}{HTML_SUFFIX}"))
}

/// Writes the HTML fragment, creating parent directories as needed.
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, html).map_err(IoError::Io)
}
