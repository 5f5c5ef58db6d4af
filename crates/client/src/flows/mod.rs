//! State machines behind the two password reset pages.
//!
//! Each page owns one form value inside some reactive store. A submit is split
//! into `begin_submit` (synchronous, decides whether a request goes out) and
//! `settle` (applies the response), with the network call in between. The
//! store is only borrowed for those two steps, never across the await.

use std::cell::RefCell;
use std::rc::Rc;

pub mod confirm_reset;
pub mod request_reset;

/// Identifies one accepted submit. A response whose ticket is not the one in
/// flight is dropped.
pub type Ticket = u64;

/// Somewhere a form value lives between events.
pub trait FormStore<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> FormStore<T> for RefCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T> FormStore<T> for Rc<RefCell<T>> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// In-flight bookkeeping shared by both forms.
#[derive(Debug, Clone, Default, PartialEq)]
struct Tickets {
    issued: Ticket,
    in_flight: Option<Ticket>,
}

impl Tickets {
    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight = Some(self.issued);
        self.issued
    }

    /// Consume the in-flight ticket if `ticket` is it.
    fn take(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}
