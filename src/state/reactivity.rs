// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;
type Subscribers = RefCell<Vec<(usize, Callback)>>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<Subscribers>,
    next_id: Rc<Cell<usize>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Copia del valor actual
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }

    /// Lee el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Suscribirse a cambios. El callback vive lo que viva la `Subscription`.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    /// Notificar a todos los subscribers. La lista se copia antes para que un
    /// callback pueda leer el estado o (des)suscribirse sin pánico de borrow.
    fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

/// Guard de suscripción: al soltarse, deja de recibir notificaciones
pub struct Subscription {
    id: usize,
    subscribers: Weak<Subscribers>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_every_subscriber_once() {
        let state = ReactiveState::new(0u32);
        let hits = Rc::new(Cell::new(0));

        let _a = {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1))
        };
        let _b = {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1))
        };

        state.set(5);
        assert_eq!(hits.get(), 2);
        assert_eq!(state.snapshot(), 5);
    }

    #[test]
    fn subscriber_sees_new_value() {
        let state = ReactiveState::new(String::from("antes"));
        let seen = Rc::new(RefCell::new(String::new()));

        let _sub = {
            let seen = seen.clone();
            let reader = state.clone();
            state.subscribe(move || *seen.borrow_mut() = reader.snapshot())
        };

        state.set(format!("{}-después", state.snapshot()));
        assert_eq!(*seen.borrow(), "antes-después");
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let state = ReactiveState::new(1);
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1))
        };
        state.set(2);
        assert_eq!(hits.get(), 1);

        drop(sub);
        state.set(3);
        assert_eq!(hits.get(), 1);
        assert!(state.subscribers.borrow().is_empty());
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let other = state.clone();
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            other.subscribe(move || hits.set(hits.get() + 1))
        };

        state.set(3);
        assert_eq!(other.snapshot(), 3);
        assert_eq!(hits.get(), 1);
        assert!(state.ptr_eq(&other));
    }
}
