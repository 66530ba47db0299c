//! Render-frame throttling for bursty events such as `scroll`.
//!
//! A [`Throttle`] forwards at most one call per display refresh. Calls made
//! while a flush is already scheduled are dropped, except that the most
//! recent arguments replace the pending ones, so the flush always sees the
//! latest state.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Something that can run a task on the next display refresh.
///
/// In the browser this is `requestAnimationFrame`.
pub trait FrameScheduler {
    fn request_frame(&self, task: Box<dyn FnOnce()>);
}

struct Inner<A> {
    latched: Cell<bool>,
    pending: RefCell<Option<A>>,
    callback: RefCell<Box<dyn FnMut(A)>>,
    scheduler: Rc<dyn FrameScheduler>,
}

/// A callback wrapper that coalesces calls into one per frame.
///
/// Cloning shares the latch: all clones throttle together.
pub struct Throttle<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for Throttle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static> Throttle<A> {
    pub fn new(scheduler: Rc<dyn FrameScheduler>, callback: impl FnMut(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                latched: Cell::new(false),
                pending: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                scheduler,
            }),
        }
    }

    /// Record `args` and schedule a flush unless one is already pending.
    pub fn call(&self, args: A) {
        *self.inner.pending.borrow_mut() = Some(args);
        if self.inner.latched.replace(true) {
            return;
        }
        let inner = Rc::clone(&self.inner);
        self.inner
            .scheduler
            .request_frame(Box::new(move || Self::flush(&inner)));
    }

    /// Whether a flush is scheduled and not yet completed.
    pub fn is_latched(&self) -> bool {
        self.inner.latched.get()
    }

    fn flush(inner: &Inner<A>) {
        let args = inner.pending.borrow_mut().take();
        if let Some(args) = args {
            (*inner.callback.borrow_mut())(args);
        }
        // Not reached if the callback panics: the throttle then stays latched.
        inner.latched.set(false);
    }
}

/// A frame scheduler driven by hand.
///
/// Tasks queue up until [`ManualFrames::run_frame`] is called, which runs
/// everything requested before the frame started.
#[derive(Default)]
pub struct ManualFrames {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl ManualFrames {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run one refresh cycle. Returns the number of tasks run.
    pub fn run_frame(&self) -> usize {
        let tasks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(task);
    }
}
