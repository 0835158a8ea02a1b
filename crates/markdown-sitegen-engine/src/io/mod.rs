mod template;

pub use template::Template;

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::markdown_to_html;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {}", .0.display())]
    InvalidDir(PathBuf),
    #[error("Unsupported path: {0}")]
    Path(#[from] relative_path::FromPathError),
    #[error("Markdown must start with a \"# \" heading")]
    MissingTitle,
    #[error("Failed to render markdown: {0}")]
    Render(#[from] crate::Error),
    #[error("Output directory {} would overwrite {}", .output.display(), .input.display())]
    OutputOverlap { output: PathBuf, input: PathBuf },
    #[error("Failed to generate {}: {source}", .path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: Box<SiteError>,
    },
}

/// Returns the page title: the first line, which must start with `# `.
pub fn extract_title(markdown: &str) -> Result<&str, SiteError> {
    markdown
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("# "))
        .map(str::trim)
        .ok_or(SiteError::MissingTitle)
}

/// Renders a full page: the document's HTML and title spliced into `template`.
pub fn render_page(markdown: &str, template: &Template) -> Result<String, SiteError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    Ok(template.render(title, &content))
}

/// Converts one Markdown file into an HTML page at `dest`.
pub fn generate_page(from: &Path, template: &Template, dest: &Path) -> Result<(), SiteError> {
    log::info!("Generating page {} -> {}", from.display(), dest.display());

    let page = read_markdown(from)
        .and_then(|markdown| render_page(&markdown, template))
        .map_err(|source| SiteError::Page {
            path: from.to_path_buf(),
            source: Box::new(source),
        })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Generates a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir` with an `.html` extension.
///
/// Returns the written paths in sorted order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    validate_dir(content_dir)?;

    let mut written = Vec::new();
    for relative in scan_markdown_files(content_dir)? {
        let dest = relative.with_extension("html").to_path(dest_dir);
        generate_page(&relative.to_path(content_dir), template, &dest)?;
        written.push(dest);
    }
    Ok(written)
}

/// Lists `.md` files under `root`, relative to it, sorted.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, SiteError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, RelativePath::new(""), &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &RelativePath,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), SiteError> {
    for entry in sorted_entries(&dir.to_path(root))? {
        let name = RelativePathBuf::from_path(entry.file_name())?;
        let relative = dir.join(&name);
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_symlink() && path.is_dir() {
            log::warn!("Skipping symlinked directory {}", path.display());
        } else if file_type.is_dir() {
            scan_directory_recursive(root, &relative, files)?;
        } else if relative.extension() == Some("md") {
            files.push(relative);
        } else {
            log::warn!("Skipping non-markdown file {}", path.display());
        }
    }

    Ok(())
}

/// Recursively copies `from` into `to`, creating directories as needed.
///
/// Returns the number of files copied.
pub fn copy_static(from: &Path, to: &Path) -> Result<usize, SiteError> {
    validate_dir(from)?;
    fs::create_dir_all(to)?;

    let mut copied = 0;
    for entry in sorted_entries(from)? {
        let source = entry.path();
        let dest = to.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_symlink() && source.is_dir() {
            log::warn!("Skipping symlinked directory {}", source.display());
        } else if file_type.is_dir() {
            copied += copy_static(&source, &dest)?;
        } else {
            log::info!("Copying {} -> {}", source.display(), dest.display());
            fs::copy(&source, &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Deletes `path` if it exists and recreates it empty.
pub fn reset_output_dir(path: &Path) -> Result<(), SiteError> {
    if path.exists() {
        log::debug!("Removing {}", path.display());
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Refuses an output directory that resetting or filling would damage.
///
/// The output must not equal or contain any input, and must not sit inside
/// `static_dir`, which is copied into it.
pub fn check_output_dir(
    output_dir: &Path,
    content_dir: &Path,
    static_dir: &Path,
    template_path: &Path,
) -> Result<(), SiteError> {
    let output = resolve_path(output_dir)?;
    let overlap = |input: &Path| SiteError::OutputOverlap {
        output: output_dir.to_path_buf(),
        input: input.to_path_buf(),
    };

    for input in [content_dir, static_dir, template_path] {
        if resolve_path(input)?.starts_with(&output) {
            return Err(overlap(input));
        }
    }
    if output.starts_with(resolve_path(static_dir)?) {
        return Err(overlap(static_dir));
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), SiteError> {
    if !path.exists() || !path.is_dir() {
        return Err(SiteError::InvalidDir(path.to_path_buf()));
    }

    Ok(())
}

fn read_markdown(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        return Err(SiteError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

// Canonicalizes the longest existing prefix so paths that do not exist yet
// still compare against symlink-resolved inputs.
fn resolve_path(path: &Path) -> Result<PathBuf, SiteError> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>, SiteError> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
