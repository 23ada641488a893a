//! Rule passes applied after the industry seed
//!
//! Order matters and is fixed by the assembler: need rules, then the
//! orchestration trigger, then channel hints. Each pass only appends;
//! nothing removes or re-tiers an earlier entry.

pub mod channel;
pub mod needs;
pub mod orchestration;
