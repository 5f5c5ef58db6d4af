use client::flows::FormStore;
use dioxus::prelude::*;

/// Lets the form drivers read and write page state held in a signal.
pub struct SignalStore<T: 'static>(pub Signal<T>);

impl<T: 'static> FormStore<T> for SignalStore<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = self.0;
        let mut value = signal.write();
        f(&mut *value)
    }
}
