//! Application Layer - Assembly
//!
//! Resolution and the public assembler surfaces, built on the domain types
//! of `assembly-domain`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`assembler`] | Register, assemble, release and merge |
//! | [`resolver`] | Depth-first, memoizing dependency resolution |
//! | [`comprehension`] | Restricted one-shot assembler with `fyield` |
//! | [`singleton`] | Process-wide shared assembler |
//! | [`extract`] | Typed tuple extraction |
//! | [`options`] | Resolution and registration tunables |

pub mod assembler;
pub mod comprehension;
pub mod extract;
pub mod options;
pub mod resolver;
pub mod singleton;

pub use assembler::Assembler;
pub use comprehension::Comprehension;
pub use extract::Extract;
pub use options::AssemblerOptions;
pub use resolver::{ResolutionReport, Resolver};
