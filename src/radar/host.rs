use super::model::Radar;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

pub type FrameCallback = Box<dyn FnOnce() + 'static>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Surface is already attached to a container")]
    AlreadyAttached,
    #[error("Surface is not attached to this container")]
    NotAttached,
}

/// Millisecond time source; only differences between readings matter.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// "Run this before the next repaint" and its cancellation.
///
/// `request_frame` must never run the callback synchronously.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&self, callback: FrameCallback) -> Self::Handle;
    fn cancel_frame(&self, handle: Self::Handle);
}

pub trait RadarSurface {
    fn present(&self, radar: &Radar);
}

/// Something the radar surface can be appended to and removed from.
pub trait HostContainer {
    type Surface: RadarSurface;

    fn create_surface(&self, size: f64) -> Self::Surface;
    fn attach(&self, surface: &Self::Surface) -> Result<(), HostError>;
    fn detach(&self, surface: &Self::Surface) -> Result<(), HostError>;
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(u64);

#[derive(Default)]
struct FrameQueue {
    next_id: u64,
    pending: Vec<(FrameId, FrameCallback)>,
    requested: usize,
    cancelled: usize,
}

/// Scheduler stepped by hand: callbacks queue up until [`ManualScheduler::run_frame`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<FrameQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every callback queued before this call. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    pub fn requested(&self) -> usize {
        self.queue.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameId;

    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        let mut queue = self.queue.borrow_mut();
        let id = FrameId(queue.next_id);
        queue.next_id += 1;
        queue.requested += 1;
        queue.pending.push((id, callback));
        id
    }

    fn cancel_frame(&self, handle: FrameId) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|(id, _)| *id != handle);
        if queue.pending.len() < before {
            queue.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(10.0);
        let shared = clock.clone();
        shared.advance(6.5);
        assert_eq!(clock.now_ms(), 16.5);
        clock.set(0.0);
        assert_eq!(shared.now_ms(), 0.0);
    }

    #[test]
    fn test_manual_scheduler_defers_callbacks() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        scheduler.request_frame(Box::new(move || h.set(h.get() + 1)));
        assert_eq!(hits.get(), 0);
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.run_frame(), 0);
    }

    #[test]
    fn test_manual_scheduler_cancel() {
        let scheduler = ManualScheduler::new();
        let id = scheduler.request_frame(Box::new(|| panic!("cancelled frame ran")));
        scheduler.cancel_frame(id);
        scheduler.cancel_frame(id);
        assert_eq!(scheduler.cancelled(), 1);
        assert_eq!(scheduler.run_frame(), 0);
    }

    #[test]
    fn test_callbacks_requested_during_a_frame_wait_for_the_next() {
        let scheduler = ManualScheduler::new();
        let inner = scheduler.clone();
        scheduler.request_frame(Box::new(move || {
            inner.request_frame(Box::new(|| {}));
        }));
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(scheduler.pending(), 1);
    }
}
