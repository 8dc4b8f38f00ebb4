//! Thread-to-core pinning for stable serial measurements.
//!
//! Pinning the measuring thread to the core it is already running on keeps
//! the scheduler from migrating it mid-measurement. Only Linux exposes a
//! real affinity API through libc; elsewhere the guard is a no-op.

/// RAII guard: pins the current thread on creation, restores the previous
/// affinity mask on drop.
///
/// Pinning is best-effort. If any step fails (restricted environments,
/// exotic schedulers) the guard simply does nothing.
pub struct CpuPinGuard {
    #[cfg(target_os = "linux")]
    previous: Option<libc::cpu_set_t>,
}

#[cfg(target_os = "linux")]
impl CpuPinGuard {
    pub fn new() -> Self {
        let setsize = std::mem::size_of::<libc::cpu_set_t>();
        unsafe {
            let mut previous: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, setsize, &mut previous) != 0 {
                return Self { previous: None };
            }

            let cpu = libc::sched_getcpu();
            if cpu < 0 {
                return Self { previous: None };
            }

            let mut pinned: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut pinned);
            libc::CPU_SET(cpu as usize, &mut pinned);
            if libc::sched_setaffinity(0, setsize, &pinned) != 0 {
                return Self { previous: None };
            }

            Self {
                previous: Some(previous),
            }
        }
    }
}

#[cfg(target_os = "linux")]
impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            unsafe {
                let setsize = std::mem::size_of::<libc::cpu_set_t>();
                let _ = libc::sched_setaffinity(0, setsize, &previous);
            }
        }
    }
}

#[cfg(not(target_os = "linux"))]
impl CpuPinGuard {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
