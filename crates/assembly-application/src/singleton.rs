//! Process-wide assembler
//!
//! The first call to [`get`] builds the shared assembler from its literals.
//! Every later call returns that same instance and drops the literals it was
//! given, so the first caller's literals win for the life of the process.
//! Initialisation is guarded by [`OnceCell`]; access goes through a
//! [`Mutex`].

use std::sync::Mutex;

use assembly_domain::Value;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::assembler::Assembler;

static INSTANCE: OnceCell<Mutex<Assembler>> = OnceCell::new();

/// The shared assembler, created from `literals` on first use
pub fn get<I, K>(literals: I) -> &'static Mutex<Assembler>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    INSTANCE.get_or_init(|| {
        let assembler = Assembler::with_literals(literals);
        debug!(literals = assembler.len(), "Initialised shared assembler");
        Mutex::new(assembler)
    })
}

/// Whether the shared assembler has been created
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}
