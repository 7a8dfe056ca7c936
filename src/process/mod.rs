pub mod builtin;
pub mod energy;
pub mod lookup;

pub use energy::{flag_most_energy, max_energy};
pub use lookup::{resolve_parameters, FnLookup, LookupKind, LookupTables, ProcessLookup};
