//! Runtime Probe
//!
//! Read-only process introspection: live async tasks and resident memory.

use parking_lot::Mutex;
use sysinfo::{Pid, System};
use tokio::runtime::Handle;

// == Runtime Probe ==
/// Samples process figures that are not owned by the metrics store.
pub struct RuntimeProbe {
    system: Mutex<System>,
    pid: Option<Pid>,
}

impl RuntimeProbe {
    /// Creates a probe bound to the current process.
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
            pid: sysinfo::get_current_pid().ok(),
        }
    }

    // == Live Tasks ==
    /// Number of alive tasks on the runtime the caller runs on, 0 outside one.
    pub fn live_tasks(&self) -> usize {
        Handle::try_current()
            .map(|handle| handle.metrics().num_alive_tasks())
            .unwrap_or(0)
    }

    // == Memory Usage ==
    /// Resident memory of this process in KB, 0 if it cannot be read.
    pub fn memory_usage_kb(&self) -> u64 {
        let Some(pid) = self.pid else {
            return 0;
        };

        let mut system = self.system.lock();
        if !system.refresh_process(pid) {
            return 0;
        }

        system
            .process(pid)
            .map(|process| process.memory() / 1024)
            .unwrap_or(0)
    }
}

impl Default for RuntimeProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuntimeProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeProbe").field("pid", &self.pid).finish()
    }
}
