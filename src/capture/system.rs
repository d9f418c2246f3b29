//! System camera permission service
//!
//! Desktop platforms have no central camera-permission broker the way
//! mobile OSes do, so this service keeps the user's decision itself: the
//! first capture attempt shows a yes/no dialog and the answer is persisted
//! as a small TOML record in the config directory. Once decided, the user
//! is never re-prompted; the decision can only be changed through the
//! settings escape hatch (or `camera-capture reset-permission`).

use std::fs;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::capture::{PermissionService, PermissionStatus};

/// Persisted permission record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
struct PermissionRecord {
    decision: StoredDecision,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum StoredDecision {
    Authorized,
    Denied,
}

/// Camera permission service backed by a persisted decision file
#[derive(Debug, Clone)]
pub struct SystemPermissionService {
    /// Where the decision record lives
    store_path: PathBuf,
    /// Policy lock from config; reported as `Restricted`, never prompts
    policy_locked: bool,
}

impl SystemPermissionService {
    /// Create a permission service over the given decision store
    pub fn new(store_path: PathBuf, policy_locked: bool) -> Self {
        Self {
            store_path,
            policy_locked,
        }
    }

    /// Path of the decision store
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Remove the persisted decision so the next capture prompts again.
    pub fn clear_decision(&self) -> io::Result<()> {
        match fs::remove_file(&self.store_path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    fn persist(&self, status: PermissionStatus) {
        let decision = match status {
            PermissionStatus::Authorized => StoredDecision::Authorized,
            PermissionStatus::Denied => StoredDecision::Denied,
            // Only terminal user answers are persisted
            _ => return,
        };

        if let Err(e) = write_decision(&self.store_path, decision) {
            error!(
                "Failed to persist camera permission decision to {}: {}",
                self.store_path.display(),
                e
            );
        }
    }

    /// Resolve a prompt outcome. `None` means the prompt never reached the
    /// user; that answers `Denied` for this attempt but leaves the store
    /// untouched so the next attempt can prompt again.
    fn record_prompt_answer(&self, answer: Option<bool>) -> PermissionStatus {
        match answer {
            Some(true) => {
                self.persist(PermissionStatus::Authorized);
                PermissionStatus::Authorized
            }
            Some(false) => {
                self.persist(PermissionStatus::Denied);
                PermissionStatus::Denied
            }
            None => PermissionStatus::Denied,
        }
    }
}

impl PermissionService for SystemPermissionService {
    fn check(&self) -> PermissionStatus {
        if self.policy_locked {
            return PermissionStatus::Restricted;
        }

        match read_decision(&self.store_path) {
            Ok(Some(StoredDecision::Authorized)) => PermissionStatus::Authorized,
            Ok(Some(StoredDecision::Denied)) => PermissionStatus::Denied,
            Ok(None) => PermissionStatus::NotDetermined,
            Err(e) => {
                warn!(
                    "Unreadable permission store at {} ({}); treating as undecided",
                    self.store_path.display(),
                    e
                );
                PermissionStatus::NotDetermined
            }
        }
    }

    fn request(&self) -> impl Future<Output = PermissionStatus> + Send {
        let service = self.clone();
        async move {
            let current = service.check();
            if !current.can_prompt() {
                // The contract forbids calling request() once decided;
                // answer from the store instead of re-prompting.
                warn!("Permission requested while status is {}", current);
                return current;
            }

            debug!("Prompting user for camera permission");
            let answer = match tokio::task::spawn_blocking(show_permission_prompt).await {
                Ok(answered_yes) => Some(answered_yes),
                Err(e) => {
                    error!("Permission prompt task failed: {}", e);
                    None
                }
            };

            service.record_prompt_answer(answer)
        }
    }
}

/// Show the blocking yes/no permission dialog
fn show_permission_prompt() -> bool {
    let result = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("Camera Access")
        .set_description("Allow this app to access the camera to take photos?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .show();

    matches!(result, rfd::MessageDialogResult::Yes)
}

fn read_decision(path: &Path) -> io::Result<Option<StoredDecision>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let record: PermissionRecord = toml::from_str(&contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    Ok(Some(record.decision))
}

fn write_decision(path: &Path, decision: StoredDecision) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string(&PermissionRecord { decision })
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn service_in(dir: &Path) -> SystemPermissionService {
        SystemPermissionService::new(dir.join("permission.toml"), false)
    }

    #[test]
    fn test_check_is_not_determined_without_store() {
        let dir = tempdir().unwrap();
        let service = service_in(dir.path());
        assert_eq!(service.check(), PermissionStatus::NotDetermined);
    }

    #[test]
    fn test_check_reads_persisted_decisions() {
        let dir = tempdir().unwrap();
        let service = service_in(dir.path());

        write_decision(service.store_path(), StoredDecision::Authorized).unwrap();
        assert_eq!(service.check(), PermissionStatus::Authorized);

        write_decision(service.store_path(), StoredDecision::Denied).unwrap();
        assert_eq!(service.check(), PermissionStatus::Denied);
    }

    #[test]
    fn test_policy_lock_is_restricted() {
        let dir = tempdir().unwrap();
        let service = SystemPermissionService::new(dir.path().join("permission.toml"), true);
        assert_eq!(service.check(), PermissionStatus::Restricted);
    }

    #[test]
    fn test_corrupt_store_treated_as_undecided() {
        let dir = tempdir().unwrap();
        let service = service_in(dir.path());
        fs::write(service.store_path(), "decision = 12").unwrap();
        assert_eq!(service.check(), PermissionStatus::NotDetermined);
    }

    #[test]
    fn test_clear_decision() {
        let dir = tempdir().unwrap();
        let service = service_in(dir.path());

        write_decision(service.store_path(), StoredDecision::Denied).unwrap();
        service.clear_decision().unwrap();
        assert_eq!(service.check(), PermissionStatus::NotDetermined);

        // Clearing an absent store is fine
        service.clear_decision().unwrap();
    }

    #[tokio::test]
    async fn test_request_answers_from_store_once_decided() {
        let dir = tempdir().unwrap();
        let service = service_in(dir.path());

        // A decided store must never re-prompt; request() answers directly.
        write_decision(service.store_path(), StoredDecision::Denied).unwrap();
        assert_eq!(service.request().await, PermissionStatus::Denied);

        write_decision(service.store_path(), StoredDecision::Authorized).unwrap();
        assert_eq!(service.request().await, PermissionStatus::Authorized);
    }

    #[test]
    fn test_prompt_answers_are_recorded() {
        let dir = tempdir().unwrap();
        let service = service_in(dir.path());

        assert_eq!(
            service.record_prompt_answer(Some(false)),
            PermissionStatus::Denied
        );
        assert_eq!(service.check(), PermissionStatus::Denied);

        assert_eq!(
            service.record_prompt_answer(Some(true)),
            PermissionStatus::Authorized
        );
        assert_eq!(service.check(), PermissionStatus::Authorized);
    }

    #[test]
    fn test_failed_prompt_denies_without_persisting() {
        let dir = tempdir().unwrap();
        let service = service_in(dir.path());

        // The dialog never reached the user: denied for now, but the store
        // stays undecided so the next attempt prompts again.
        assert_eq!(service.record_prompt_answer(None), PermissionStatus::Denied);
        assert_eq!(service.check(), PermissionStatus::NotDetermined);
        assert!(!service.store_path().exists());
    }

    #[test]
    fn test_record_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("permission.toml");

        write_decision(&path, StoredDecision::Authorized).unwrap();
        assert_eq!(
            read_decision(&path).unwrap(),
            Some(StoredDecision::Authorized)
        );
    }
}
