use gloo_timers::callback::Timeout;

/// Runs a task once after a delay on the current thread.
///
/// Scheduled tasks cannot be cancelled. Anything a task touches must
/// tolerate the world having moved on by the time it fires.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timers via `setTimeout`.
#[derive(Default, Clone, Copy, Debug)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(delay_ms, task);
        timeout.forget();
    }
}
