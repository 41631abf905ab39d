use std::cell::Cell;
use std::rc::Rc;

/// Handle to a registered listener.
///
/// The listener stays registered until the handle is dropped or
/// [`Subscription::unsubscribe`] is called. Owners hold the handle for as long
/// as they want to receive values.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    active: Rc<Cell<bool>>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(active: Rc<Cell<bool>>, detach: impl FnOnce() + 'static) -> Self {
        Self { active, detach: Some(Box::new(detach)) }
    }

    /// Handle for a listener that never got registered
    pub(crate) fn detached() -> Self {
        Self { active: Rc::new(Cell::new(false)), detach: None }
    }

    /// False once the listener has been detached, either explicitly or by a
    /// self-terminating subscription consuming its value
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.active.set(false);
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.active.get()).finish()
    }
}
