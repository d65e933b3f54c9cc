//! Domain types.

mod access;
mod principal;

pub use access::AccessRecord;
pub use principal::{Principal, PrincipalId, PrincipalKind};
