use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

type Observer = Box<dyn Fn(bool) + Send + Sync>;

/// Process-wide observable "is authenticated" flag.
///
/// An explicit subject rather than an ambient global: the one instance is
/// owned by [`crate::Session`] and injected wherever the flag is read or
/// observed. The only writers are login, logout and startup-init, all driven
/// by discrete UI events that cannot overlap in the single-threaded shell
/// model, so no transaction discipline is needed; the atomics only make the
/// type shareable across handles.
///
/// Subscribers get the current value immediately on subscription and every
/// value written afterwards (behavior-subject semantics, matching how the
/// shell hides or shows itself on sign-in/out).
#[derive(Default)]
pub struct SessionState {
    signed_in: AtomicBool,
    observers: Mutex<Vec<Observer>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::Acquire)
    }

    pub fn subscribe(&self, observer: impl Fn(bool) + Send + Sync + 'static) {
        observer(self.is_signed_in());
        self.observers.lock().unwrap().push(Box::new(observer));
    }

    pub(crate) fn set(&self, signed_in: bool) {
        self.signed_in.store(signed_in, Ordering::Release);
        for observer in self.observers.lock().unwrap().iter() {
            observer(signed_in);
        }
    }
}

impl core::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionState")
            .field("signed_in", &self.is_signed_in())
            .finish_non_exhaustive()
    }
}
