//! The filesystem side of font discovery: where fonts live on each
//! platform, how directories are walked and how files are read. The
//! registry is the only consumer.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The system and per-user font locations of the current platform.
/// Directories that do not exist are fine; the walk just yields
/// nothing for them.
pub fn font_directories() -> Vec<PathBuf> {
    let mut directories = Vec::new();

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        directories.push(PathBuf::from("/usr/share/fonts"));
        directories.push(PathBuf::from("/usr/local/share/fonts"));
        if let Ok(home) = std::env::var("HOME") {
            let home = Path::new(&home);
            directories.push(home.join(".fonts"));
            directories.push(home.join(".local/share/fonts"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        directories.push(PathBuf::from("/Library/Fonts"));
        directories.push(PathBuf::from("/System/Library/Fonts"));
        if let Ok(home) = std::env::var("HOME") {
            directories.push(Path::new(&home).join("Library/Fonts"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        directories.push(PathBuf::from("C:\\Windows\\Fonts"));
    }

    directories
}

/// Recursively enumerates the files under `path`. Unreadable entries
/// are skipped.
pub fn walk(path: &Path) -> Vec<PathBuf> {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Reads a whole file into memory.
pub fn read_all(path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Whether `path` carries one of the accepted font suffixes. The
/// comparison is exact and case-sensitive: `.TTF` does not qualify.
pub fn has_font_extension(path: &Path) -> bool {
    path.to_str().is_some_and(|path| {
        path.ends_with(".ttf")
            || path.ends_with(".ttc")
            || path.ends_with(".otf")
            || path.ends_with(".otc")
    })
}
