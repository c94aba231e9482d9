//! # File I/O Module
//!
//! Budget file operations with safety features:
//! - **Atomic saves**: write to .tmp, sync, rename to prevent corruption
//! - **File locking**: prevent concurrent edits on shared drives
//! - **Version validation**: ensure schema compatibility
//!
//! ## File Format
//!
//! Budgets are saved as `.laje` files containing JSON. Lock files use the
//! `.laje.lock` extension with metadata about who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use laje_core::budget::Budget;
//! use laje_core::customer::Customer;
//! use laje_core::file_io::{load_budget, save_budget, FileLock};
//! use std::path::Path;
//!
//! let customer = Customer::new("Maria Souza", "maria@example.com", "(41) 99999-0000");
//! let budget = Budget::new("Carlos", "ORC-2026-014", customer);
//! let path = Path::new("orc-2026-014.laje");
//!
//! let lock = FileLock::acquire(path, "carlos@loja.com")?;
//! save_budget(&budget, path)?;
//! drop(lock); // releases the lock
//! # Ok::<(), laje_core::errors::EstimateError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::budget::{Budget, SCHEMA_VERSION};
use crate::errors::{EstimateError, EstimateResult};

/// Lock file metadata stored in .laje.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both OS-level file locking (via fs2) for process safety and a
/// .lock file with metadata for user visibility on shared drives.
pub struct FileLock {
    budget_path: PathBuf,
    lock_path: PathBuf,
    /// The underlying file handle (keeps the OS lock alive)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a budget file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired
    /// * `Err(EstimateError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> EstimateResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(EstimateError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                // Stale lock, take it over
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                EstimateError::file_error(
                    "create lock",
                    lock_path.display().to_string(),
                    e.to_string(),
                )
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            EstimateError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json =
            serde_json::to_string_pretty(&info).map_err(|e| EstimateError::SerializationError {
                reason: e.to_string(),
            })?;
        lock_file
            .write_all(lock_json.as_bytes())
            .and_then(|_| lock_file.sync_all())
            .map_err(|e| {
                EstimateError::file_error(
                    "write lock",
                    lock_path.display().to_string(),
                    e.to_string(),
                )
            })?;

        Ok(FileLock {
            budget_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Path to the budget file this lock covers
    pub fn budget_path(&self) -> &Path {
        &self.budget_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // OS lock is released when _lock_file is dropped
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(budget_path: &Path) -> PathBuf {
    let mut lock_path = budget_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> EstimateResult<LockInfo> {
    let contents = fs::read_to_string(lock_path).map_err(|e| {
        EstimateError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str(&contents).map_err(|e| EstimateError::SerializationError {
        reason: e.to_string(),
    })
}

/// A lock is stale when its owning process on this machine is gone, or when
/// it is older than a day (crashed session on another machine).
fn is_lock_stale(info: &LockInfo) -> bool {
    #[cfg(unix)]
    if hostname().is_some_and(|machine| machine == info.machine)
        && fs::metadata(format!("/proc/{}", info.pid)).is_err()
    {
        return true;
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Save a budget to a file with atomic write semantics.
///
/// The save writes to a temporary file, syncs it to disk, then renames it
/// over the target (atomic on most filesystems), so an interrupted process
/// never leaves a half-written budget behind.
pub fn save_budget(budget: &Budget, path: &Path) -> EstimateResult<()> {
    let json =
        serde_json::to_string_pretty(budget).map_err(|e| EstimateError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("laje.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        EstimateError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file
        .write_all(json.as_bytes())
        .and_then(|_| tmp_file.sync_all())
        .map_err(|e| {
            EstimateError::file_error(
                "write temp file",
                tmp_path.display().to_string(),
                e.to_string(),
            )
        })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        EstimateError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a budget from a file.
///
/// # Returns
///
/// * `Ok(Budget)` - Successfully loaded
/// * `Err(EstimateError::VersionMismatch)` - File version is incompatible
/// * `Err(EstimateError::SerializationError)` - Invalid JSON
/// * `Err(EstimateError::FileError)` - I/O error
pub fn load_budget(path: &Path) -> EstimateResult<Budget> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EstimateError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let budget: Budget =
        serde_json::from_str(&contents).map_err(|e| EstimateError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&budget.meta.version)?;

    Ok(budget)
}

/// Load a budget, returning whether it's read-only due to a lock.
///
/// # Returns
///
/// * `Ok((Budget, None))` - Loaded, no lock
/// * `Ok((Budget, Some(LockInfo)))` - Loaded, but another user has the lock
pub fn load_budget_with_lock_check(path: &Path) -> EstimateResult<(Budget, Option<LockInfo>)> {
    let budget = load_budget(path)?;
    let lock_info = FileLock::check(path);
    Ok((budget, lock_info))
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match; while we are in 0.x, a file with a newer minor
/// version is also rejected (breaking changes allowed between minors).
fn validate_version(file_version: &str) -> EstimateResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    let mismatch = || EstimateError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Customer;
    use crate::estimation::slab::SlabInput;
    use std::env::temp_dir;

    fn temp_budget_path(name: &str) -> PathBuf {
        temp_dir().join(format!("lajecalc_test_{}.laje", name))
    }

    fn sample_budget() -> Budget {
        let customer = Customer::new("Maria Souza", "maria@example.com", "(41) 99999-0000");
        let mut budget = Budget::new("Carlos", "ORC-TEST", customer);
        budget.add_area(SlabInput::new("Sala", 5.0, 0.12));
        budget
    }

    #[test]
    fn test_lock_path_generation() {
        let budget_path = Path::new("/path/to/orcamento.laje");
        assert_eq!(
            lock_path_for(budget_path),
            Path::new("/path/to/orcamento.laje.lock")
        );
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("teste@loja.com");
        assert_eq!(info.user_id, "teste@loja.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_budget_path("roundtrip");

        let budget = sample_budget();
        save_budget(&budget, &path).unwrap();

        let loaded = load_budget(&path).unwrap();
        assert_eq!(loaded.meta.seller, "Carlos");
        assert_eq!(loaded.meta.reference, "ORC-TEST");
        assert_eq!(loaded.customer.name, "Maria Souza");
        assert_eq!(loaded.area_count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_budget_path("atomic");
        let tmp_path = path.with_extension("laje.tmp");

        save_budget(&sample_budget(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_budget_path("lock_test");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "teste@loja.com").unwrap();
        assert_eq!(lock.info.user_id, "teste@loja.com");

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());

        // Different major must fail
        assert!(validate_version("1.0.0").is_err());
        // Newer minor (in 0.x) must fail
        assert!(validate_version("0.2.0").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_budget_path("lock_check");

        save_budget(&sample_budget(), &path).unwrap();

        let (loaded, lock_info) = load_budget_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.reference, "ORC-TEST");
        assert!(lock_info.is_none());

        let _ = fs::remove_file(&path);
    }
}
