//! Static reference content: the food-safety table, care guides, and
//! emergency triage text. All of it is compile-time data; the handlers are
//! thin lookups over it.

pub mod emergency;
pub mod food;
pub mod guides;
pub mod handlers;
