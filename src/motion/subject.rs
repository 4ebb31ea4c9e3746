use std::{
    collections::BTreeMap,
    ops::ControlFlow,
    sync::{Arc, Mutex, Weak},
};

use super::progress::Viewport;

type Observer = Arc<dyn Fn(Viewport) -> ControlFlow<()> + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    latest: Option<Viewport>,
    observers: BTreeMap<u64, Observer>,
}

/// Publishes viewport metrics to subscribed observers.
///
/// Observers are invoked in subscription order, outside the registry lock, so an
/// observer may subscribe or unsubscribe others while being notified. An observer
/// removed during a notification round is not called for the remainder of it.
#[derive(Clone, Default)]
pub struct ViewportSubject {
    registry: Arc<Mutex<Registry>>,
}

impl ViewportSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer`. If a viewport has already been published the observer
    /// is called once immediately with it.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Viewport) + Send + Sync + 'static,
    {
        self.subscribe_until(move |viewport| {
            observer(viewport);
            ControlFlow::Continue(())
        })
    }

    /// Like `subscribe`, but the observer is released as soon as it returns
    /// `ControlFlow::Break`. It is never called again after that.
    pub fn subscribe_until<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Viewport) -> ControlFlow<()> + Send + Sync + 'static,
    {
        let observer: Observer = Arc::new(observer);
        let (id, latest) = {
            let mut registry = self.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.observers.insert(id, observer.clone());
            (id, registry.latest)
        };
        log::debug!("viewport subscription {id} registered");
        if let Some(viewport) = latest {
            if observer(viewport).is_break() {
                self.release(id);
            }
        }
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn publish(&self, viewport: Viewport) {
        let ids = {
            let mut registry = self.lock();
            registry.latest = Some(viewport);
            registry.observers.keys().copied().collect::<Vec<_>>()
        };
        for id in ids {
            let observer = self.lock().observers.get(&id).cloned();
            if let Some(observer) = observer {
                if observer(viewport).is_break() {
                    self.release(id);
                }
            }
        }
    }

    fn release(&self, id: u64) {
        let removed = self.lock().observers.remove(&id);
        if removed.is_some() {
            log::debug!("viewport subscription {id} finished");
        }
    }

    pub fn latest(&self) -> Option<Viewport> {
        self.lock().latest
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .expect("should be able to lock viewport registry")
    }
}

/// Keeps an observer registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its observer"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(self) {
        drop(self)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // the observer is dropped after the lock is released
        let removed = registry
            .lock()
            .ok()
            .and_then(|mut r| r.observers.remove(&self.id));
        if removed.is_some() {
            log::debug!("viewport subscription {} released", self.id);
        }
    }
}
