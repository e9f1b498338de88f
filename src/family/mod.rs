//! Family roster, cost-period partitioning, and payment event derivation.

pub mod event;
#[allow(clippy::module_inception)]
pub mod family;
pub mod member;
pub mod period;

pub use event::{Event, MemberLedger};
pub use family::Family;
pub use member::Member;
pub use period::Period;
