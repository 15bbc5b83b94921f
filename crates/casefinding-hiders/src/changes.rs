use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Listener<T> = Box<dyn FnMut(&T)>;

/// A push notifier for control value changes.
///
/// Listeners run synchronously, in subscription order. A value emitted while
/// another is being delivered is queued and delivered after it, so every
/// listener finishes with one value before it sees the next.
pub struct ValueChanges<T> {
    inner: Rc<RefCell<Listeners<T>>>,
}

struct Listeners<T> {
    next_id: u64,
    active: Vec<(u64, Listener<T>)>,
    emitting: bool,
    pending: VecDeque<T>,
    cancelled: Vec<u64>,
}

impl<T> Listeners<T> {
    /// The caller drops the returned listener once the borrow is released.
    fn remove(&mut self, id: u64) -> Option<Listener<T>> {
        if let Some(pos) = self.active.iter().position(|(i, _)| *i == id) {
            return Some(self.active.remove(pos).1);
        }
        if self.emitting {
            // Taken out for delivery; dropped when it is put back.
            self.cancelled.push(id);
        }
        None
    }
}

impl<T: Clone + 'static> ValueChanges<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                active: Vec::new(),
                emitting: false,
                pending: VecDeque::new(),
                cancelled: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.active.push((id, Box::new(listener)));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let removed = inner.borrow_mut().remove(id);
                drop(removed);
            }
        })
    }

    /// Deliver `value` to every listener before returning.
    ///
    /// If a listener panics, the listeners are restored and values still
    /// queued behind the failed delivery are discarded; the notifier stays
    /// usable.
    pub fn emit(&self, value: &T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.emitting {
                inner.pending.push_back(value.clone());
                return;
            }
            inner.emitting = true;
        }

        let mut delivery = Delivery {
            inner: &*self.inner,
            listeners: Vec::new(),
        };
        let mut next = Some(value.clone());
        while let Some(value) = next {
            delivery.listeners = std::mem::take(&mut self.inner.borrow_mut().active);
            for (id, listener) in delivery.listeners.iter_mut() {
                if self.inner.borrow().cancelled.contains(id) {
                    continue;
                }
                listener(&value);
            }
            delivery.restore();
            next = self.inner.borrow_mut().pending.pop_front();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

/// Listeners taken out for one delivery. Dropping it, normally or while
/// unwinding, puts them back and ends the emission.
struct Delivery<'a, T> {
    inner: &'a RefCell<Listeners<T>>,
    listeners: Vec<(u64, Listener<T>)>,
}

impl<T> Delivery<'_, T> {
    fn restore(&mut self) {
        let delivered = std::mem::take(&mut self.listeners);
        let cancelled = std::mem::take(&mut self.inner.borrow_mut().cancelled);
        let (dropped, kept): (Vec<_>, Vec<_>) = delivered
            .into_iter()
            .partition(|(id, _)| cancelled.contains(id));
        drop(dropped);

        let mut inner = self.inner.borrow_mut();
        // Listeners added during delivery go after the existing ones.
        let added = std::mem::replace(&mut inner.active, kept);
        inner.active.extend(added);
    }
}

impl<T> Drop for Delivery<'_, T> {
    fn drop(&mut self) {
        self.restore();
        let mut inner = self.inner.borrow_mut();
        inner.emitting = false;
        inner.pending.clear();
    }
}

impl<T: Clone + 'static> Default for ValueChanges<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ValueChanges<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Cancellation token for a listener registered with [`ValueChanges`].
///
/// Dropping the token cancels the listener. Whoever owns the control's
/// lifecycle should hold it and drop it on teardown.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the listener registered for as long as the notifier lives.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
