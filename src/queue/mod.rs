//! Blocking FIFO Queues
//!
//! The synchronization substrate for the pipeline: two queue variants with
//! strict FIFO delivery and blocking semantics expressed as async suspension.
//!
//! - [`BoundedQueue`]: fixed capacity; `insert` suspends while the queue is
//!   full, `remove` suspends while it is empty. Blocking on insert is the only
//!   form of backpressure in the system.
//! - [`UnboundedQueue`]: `insert` never suspends (storage grows by amortized
//!   doubling); `remove` suspends only while empty.
//!
//! Both variants mirror the classic mutex-plus-counting-semaphores design:
//! a mutex-guarded ring buffer, a semaphore counting occupied slots, and (for
//! the bounded variant) a semaphore counting free slots. The mutex is never
//! held across a suspension point.
//!
//! # Architecture
//!
//! ```text
//!        insert                              remove
//!   ┌──────────────┐    ┌───┬───┬───┬───┐    ┌──────────────┐
//!   │  producer(s) │───▶│ 1 │ 2 │ 3 │...│───▶│  consumer(s) │
//!   └──────────────┘    └───┴───┴───┴───┘    └──────────────┘
//!      awaits a free       FIFO, no loss,       awaits an
//!      slot when full      no duplication       item when empty
//! ```
//!
//! Items are delivered in insertion order; under concurrent access no item is
//! lost or duplicated. Both operations are total: once a queue is
//! constructed, `insert` and `remove` cannot fail.

mod bounded;
mod unbounded;

pub use bounded::BoundedQueue;
pub use unbounded::UnboundedQueue;

#[cfg(test)]
mod tests;
