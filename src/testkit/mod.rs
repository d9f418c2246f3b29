//! Deterministic fakes for the platform services
//!
//! These substitute for the system permission and availability services so
//! the capture flow can be exercised without dialogs or a real camera. The
//! permission fake is scripted: it reports a fixed status, resolves
//! requests with a configured answer, and can hold a request open behind a
//! gate so tests can observe the suspended state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::capture::{CaptureAvailability, PermissionService, PermissionStatus};

/// Scripted permission service
///
/// `check()` returns the current scripted status; `request()` resolves with
/// the configured resolution and updates the status accordingly, mirroring
/// how a real platform records the decision.
#[derive(Clone)]
pub struct FakePermissionService {
    inner: Arc<FakeInner>,
}

struct FakeInner {
    status: Mutex<PermissionStatus>,
    resolution: Mutex<PermissionStatus>,
    check_count: AtomicUsize,
    request_count: AtomicUsize,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakePermissionService {
    /// Create a fake reporting the given status; requests resolve to
    /// `Denied` unless configured via [`resolving_to`](Self::resolving_to)
    pub fn new(status: PermissionStatus) -> Self {
        Self {
            inner: Arc::new(FakeInner {
                status: Mutex::new(status),
                resolution: Mutex::new(PermissionStatus::Denied),
                check_count: AtomicUsize::new(0),
                request_count: AtomicUsize::new(0),
                gate: Mutex::new(None),
            }),
        }
    }

    /// Script what a permission request resolves to
    pub fn resolving_to(self, resolution: PermissionStatus) -> Self {
        *self.inner.resolution.lock().unwrap() = resolution;
        self
    }

    /// Hold requests open until the returned gate is released, so tests can
    /// observe the flow while it is suspended on the prompt
    pub fn gated(self) -> (Self, FakePermissionGate) {
        let notify = Arc::new(Notify::new());
        *self.inner.gate.lock().unwrap() = Some(Arc::clone(&notify));
        (self, FakePermissionGate { notify })
    }

    /// Change the scripted status
    pub fn set_status(&self, status: PermissionStatus) {
        *self.inner.status.lock().unwrap() = status;
    }

    /// How many times `check()` was called
    pub fn check_count(&self) -> usize {
        self.inner.check_count.load(Ordering::SeqCst)
    }

    /// How many times `request()` was called
    pub fn request_count(&self) -> usize {
        self.inner.request_count.load(Ordering::SeqCst)
    }
}

impl PermissionService for FakePermissionService {
    fn check(&self) -> PermissionStatus {
        self.inner.check_count.fetch_add(1, Ordering::SeqCst);
        *self.inner.status.lock().unwrap()
    }

    fn request(&self) -> impl Future<Output = PermissionStatus> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            inner.request_count.fetch_add(1, Ordering::SeqCst);

            let gate = inner.gate.lock().unwrap().clone();
            if let Some(gate) = gate {
                gate.notified().await;
            }

            let resolution = *inner.resolution.lock().unwrap();
            *inner.status.lock().unwrap() = resolution;
            resolution
        }
    }
}

/// Releases a held permission request
pub struct FakePermissionGate {
    notify: Arc<Notify>,
}

impl FakePermissionGate {
    /// Let the pending (or next) request resolve
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

/// Scripted capture availability
#[derive(Clone)]
pub struct FakeAvailability {
    available: Arc<AtomicBool>,
}

impl FakeAvailability {
    /// Create with the given answer
    pub fn new(available: bool) -> Self {
        Self {
            available: Arc::new(AtomicBool::new(available)),
        }
    }

    /// An environment with a camera
    pub fn available() -> Self {
        Self::new(true)
    }

    /// An environment without a camera (e.g. a simulator)
    pub fn unavailable() -> Self {
        Self::new(false)
    }

    /// Change the answer mid-test
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

impl CaptureAvailability for FakeAvailability {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_permission_scripting() {
        let fake = FakePermissionService::new(PermissionStatus::NotDetermined)
            .resolving_to(PermissionStatus::Authorized);

        assert_eq!(fake.check(), PermissionStatus::NotDetermined);
        assert_eq!(fake.request().await, PermissionStatus::Authorized);
        // The decision sticks, like a real platform record.
        assert_eq!(fake.check(), PermissionStatus::Authorized);
        assert_eq!(fake.check_count(), 2);
        assert_eq!(fake.request_count(), 1);
    }

    #[tokio::test]
    async fn test_gate_holds_the_request() {
        let (fake, gate) = FakePermissionService::new(PermissionStatus::NotDetermined)
            .resolving_to(PermissionStatus::Denied)
            .gated();

        let pending = tokio::spawn(async move { fake.request().await });
        gate.release();
        assert_eq!(pending.await.unwrap(), PermissionStatus::Denied);
    }

    #[test]
    fn test_fake_availability_toggles() {
        let availability = FakeAvailability::unavailable();
        assert!(!availability.is_available());
        availability.set_available(true);
        assert!(availability.is_available());
    }
}
