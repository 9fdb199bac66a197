//! Electromagnetic solvers split by regime: shared base abstractions,
//! static, frequency-domain, and time-domain closed forms.

pub mod base;
pub mod fdem;
pub mod statics;
pub mod tdem;
