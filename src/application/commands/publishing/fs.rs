//! Filesystem helpers for the export tree.

use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

/// All regular files under `root`, as sorted `/`-separated relative paths.
pub async fn collect_files(root: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_type = entry.file_type().await?;
            let path = entry.path();
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file()
                && let Some(relative) = relative_key(root, &path)
            {
                files.push(relative);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Write through a uniquely named temporary file and rename so readers never
/// see a partial page and concurrent writers never share a temporary file.
pub async fn write_file(root: &Path, relative: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(&path);
    if let Err(err) = write_and_rename(&tmp, &path, bytes).await {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await
            && cleanup.kind() != io::ErrorKind::NotFound
        {
            tracing::warn!(error = %cleanup, tmp = %tmp.display(), "failed to remove temporary file");
        }
        return Err(err);
    }
    Ok(path)
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4()))
}

async fn write_and_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = tokio::fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    drop(file);
    tokio::fs::rename(tmp, path).await
}

/// Returns whether a file was removed.
pub async fn remove_file_if_exists(root: &Path, relative: &str) -> io::Result<bool> {
    match tokio::fs::remove_file(root.join(relative)).await {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Copy every file under `from` into `to`, keeping relative layout.
pub async fn copy_tree(from: &Path, to: &Path) -> io::Result<usize> {
    let files = collect_files(from).await?;
    for relative in &files {
        let target = to.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::copy(from.join(relative), &target).await?;
    }
    Ok(files.len())
}

pub async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}
