//! Version marker synchronization.
//! Rewrites `>x.y.z<` markers in an existing README so they match the
//! version declared in the package manifest, optionally propagating the
//! update to the parent directory's README.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::constants::{MANIFEST_FILE, VERSION_MARKER_PATTERN};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Package,
}

#[derive(Debug, Deserialize)]
struct Package {
    version: String,
}

/// Reads the package version from a Cargo manifest.
///
/// # Arguments
/// * `manifest_path` - Path to the manifest file
///
/// # Errors
/// * `Error::Storage` if the manifest cannot be read
/// * `Error::Manifest` if it cannot be parsed or declares no version
pub fn read_manifest_version<P: AsRef<Path>>(manifest_path: P) -> Result<String> {
    let raw = fs::read_to_string(manifest_path.as_ref()).map_err(Error::Storage)?;
    let manifest: Manifest =
        toml::from_str(&raw).map_err(|e| Error::Manifest(e.to_string()))?;
    Ok(manifest.package.version)
}

/// Replaces every `>x.y.z<` marker in `content` with the given version.
pub fn apply_version(content: &str, version: &str) -> String {
    let re = Regex::new(VERSION_MARKER_PATTERN).expect("version marker pattern is valid");
    re.replace_all(content, |_: &regex::Captures| format!(">{}<", version))
        .into_owned()
}

/// Resolves the parent directory's README path for a sync target.
fn parent_readme_path(target: &Path) -> PathBuf {
    let file_name = target.file_name().unwrap_or_default();
    match target.parent() {
        Some(dir) => dir.join("..").join(file_name),
        None => Path::new("..").join(file_name),
    }
}

/// Synchronizes version markers in `target` with the manifest version.
///
/// With `update_parent`, the parent directory's README must match `target`
/// exactly before the update; it is then rewritten alongside the target
/// and re-read to verify the propagation.
///
/// # Arguments
/// * `target` - README file to update
/// * `update_parent` - Whether to propagate the update to the parent README
///
/// # Errors
/// * `Error::Storage` if a file cannot be read or written
/// * `Error::Manifest` if the manifest declares no usable version
/// * `Error::Sync` if the parent README diverges before or after the update
pub fn sync_readme_version<P: AsRef<Path>>(target: P, update_parent: bool) -> Result<()> {
    let target = target.as_ref();
    let version = read_manifest_version(MANIFEST_FILE)?;
    debug!("Found version {} in {}", version, MANIFEST_FILE);

    let current = fs::read_to_string(target).map_err(Error::Storage)?;

    let parent_path = parent_readme_path(target);
    if update_parent {
        let parent = fs::read_to_string(&parent_path).map_err(Error::Storage)?;
        if parent != current {
            return Err(Error::Sync(format!(
                "parent README at {} differs from {}",
                parent_path.display(),
                target.display()
            )));
        }
    }

    let updated = apply_version(&current, &version);
    fs::write(target, &updated).map_err(Error::Storage)?;
    println!("Updated {} with version {}.", target.display(), version);

    if update_parent {
        fs::write(&parent_path, &updated).map_err(Error::Storage)?;
        let written = fs::read_to_string(&parent_path).map_err(Error::Storage)?;
        if written != updated {
            return Err(Error::Sync(format!(
                "parent README at {} does not match the update",
                parent_path.display()
            )));
        }
        println!("Updated {} with version {}.", parent_path.display(), version);
    }

    Ok(())
}
