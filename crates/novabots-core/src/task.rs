//! Repeating Frame Task
//!
//! A tick that re-requests itself from a [`FrameScheduler`] after every run.
//! The returned [`RepeatingTask`] is the only way to stop it: cancelling (or
//! dropping) the handle withdraws the pending request so no further tick runs.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::host::{FrameId, FrameScheduler};

struct TaskInner<S: FrameScheduler> {
    scheduler: Rc<S>,
    callback: RefCell<Option<S::Callback>>,
    pending: Cell<Option<FrameId>>,
    cancelled: Cell<bool>,
}

impl<S: FrameScheduler> TaskInner<S> {
    fn schedule(&self) -> Result<()> {
        let callback = self.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            let id = self.scheduler.request_frame(callback)?;
            self.pending.set(Some(id));
        }
        Ok(())
    }

    fn cancel(&self) -> bool {
        if self.cancelled.replace(true) {
            return false;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        true
    }
}

/// Handle to a running frame loop
pub struct RepeatingTask<S: FrameScheduler> {
    inner: Rc<TaskInner<S>>,
}

impl<S: FrameScheduler + 'static> RepeatingTask<S> {
    /// Schedule `tick` for the next frame and every frame after it
    pub fn start(scheduler: Rc<S>, mut tick: impl FnMut() + 'static) -> Result<Self> {
        let inner = Rc::new(TaskInner {
            scheduler,
            callback: RefCell::new(None),
            pending: Cell::new(None),
            cancelled: Cell::new(false),
        });

        let weak: Weak<TaskInner<S>> = Rc::downgrade(&inner);
        let callback = inner.scheduler.make_callback(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if inner.cancelled.get() {
                return;
            }
            tick();
            if inner.cancelled.get() {
                return;
            }
            if let Err(err) = inner.schedule() {
                tracing::warn!(%err, "frame loop stopped: could not request next frame");
                inner.cancelled.set(true);
            }
        }));
        *inner.callback.borrow_mut() = Some(callback);

        inner.schedule()?;
        Ok(Self { inner })
    }
}

impl<S: FrameScheduler> RepeatingTask<S> {
    /// Stop the loop. Returns `false` if it was already stopped.
    pub fn cancel(&self) -> bool {
        self.inner.cancel()
    }

    pub fn is_active(&self) -> bool {
        !self.inner.cancelled.get()
    }

    /// Frame request currently waiting on the scheduler
    pub fn pending(&self) -> Option<FrameId> {
        self.inner.pending.get()
    }
}

impl<S: FrameScheduler> Drop for RepeatingTask<S> {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockHost, Viewport};

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        (hits, move || sink.set(sink.get() + 1))
    }

    #[test]
    fn test_ticks_every_frame() {
        let host = Rc::new(MockHost::new(Viewport::new(10.0, 10.0)));
        let (hits, tick) = counter();
        let task = RepeatingTask::start(Rc::clone(&host), tick).unwrap();

        for _ in 0..5 {
            assert_eq!(host.run_frame(), 1);
        }
        assert_eq!(hits.get(), 5);
        assert!(task.is_active());
        assert!(task.pending().is_some());
    }

    #[test]
    fn test_cancel_stops_loop() {
        let host = Rc::new(MockHost::default());
        let (hits, tick) = counter();
        let task = RepeatingTask::start(Rc::clone(&host), tick).unwrap();
        host.run_frame();

        assert!(task.cancel());
        assert!(!task.cancel());
        assert_eq!(host.pending_frames(), 0);
        assert_eq!(host.run_frame(), 0);
        assert_eq!(hits.get(), 1);
        assert!(task.pending().is_none());
    }

    #[test]
    fn test_drop_cancels() {
        let host = Rc::new(MockHost::default());
        let (hits, tick) = counter();
        let task = RepeatingTask::start(Rc::clone(&host), tick).unwrap();
        drop(task);

        assert_eq!(host.pending_frames(), 0);
        host.run_frame();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_start_fails_when_scheduler_refuses() {
        let host = Rc::new(MockHost::default());
        host.refuse_frames(true);
        let (_, tick) = counter();
        assert!(RepeatingTask::start(host, tick).is_err());
    }

    #[test]
    fn test_reschedule_failure_ends_loop() {
        let host = Rc::new(MockHost::default());
        let (hits, tick) = counter();
        let task = RepeatingTask::start(Rc::clone(&host), tick).unwrap();

        host.refuse_frames(true);
        host.run_frame();

        assert_eq!(hits.get(), 1);
        assert!(!task.is_active());
        assert_eq!(host.pending_frames(), 0);
    }
}
