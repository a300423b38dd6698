use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback a host installs to schedule a repaint (for example
/// `DrawingArea::queue_draw`).
pub type RedrawHook = Rc<dyn Fn()>;

#[derive(Default)]
struct RedrawState {
    pending: Cell<bool>,
    hook: RefCell<Option<RedrawHook>>,
}

/// Shared "frame is stale" flag.
///
/// Interval listeners hold a clone, so a notification arriving while a frame
/// is being built only marks the next frame as needed.
#[derive(Clone, Default)]
pub struct RedrawRequest {
    inner: Rc<RedrawState>,
}

impl RedrawRequest {
    pub fn request(&self) {
        self.inner.pending.set(true);
        let hook = self.inner.hook.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// Clears the flag and returns whether a redraw had been requested.
    pub fn take(&self) -> bool {
        self.inner.pending.replace(false)
    }

    pub fn set_hook(&self, hook: Option<RedrawHook>) {
        *self.inner.hook.borrow_mut() = hook;
    }
}

impl fmt::Debug for RedrawRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawRequest")
            .field("pending", &self.inner.pending.get())
            .field("has_hook", &self.inner.hook.borrow().is_some())
            .finish()
    }
}
