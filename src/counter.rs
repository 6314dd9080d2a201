use std::thread::JoinHandle;

use crate::timing::TimingGuard;

/// Handle to a counting task started by [`spawn_count`].
///
/// Dropping the handle without joining detaches the task; it keeps
/// running to completion on its own thread.
pub struct CountTask {
    handle: JoinHandle<i32>,
}

impl CountTask {
    /// Block until the task finishes and return its total.
    pub fn join(self) -> i32 {
        // The counting loop cannot panic; 0 here is defensive only.
        self.handle.join().unwrap_or(0)
    }
}

/// Start a counting task on its own thread and return without waiting.
///
/// The task starts its total at 0 and adds every index in 0..=99, so a
/// joined task always reports 4950. Each invocation owns its total;
/// overlapping invocations do not observe each other.
pub fn spawn_count() -> CountTask {
    let handle = std::thread::spawn(|| {
        let _timing = TimingGuard::new("count");
        let mut total = 0;
        for i in 0..100 {
            total += i;
        }
        total
    });
    CountTask { handle }
}
