//! Dependency resolver
//!
//! Evaluates every pending producer of a registry, satisfying declared
//! dependencies depth-first and memoizing each result in the registry.
//!
//! ```text
//! pending: [var3, var1, var2]
//!
//! resolve(var3) ── needs var1 ── resolve(var1) ── invoke ── settle
//!              └── needs var2 ── resolve(var2) ── needs var1 (memoized)
//!                                              └── invoke ── settle
//!              └── invoke ── settle
//! resolve(var1)  already settled, skipped
//! resolve(var2)  already settled, skipped
//! ```
//!
//! The names currently being resolved form a path. Meeting a name that is
//! already on the path is a cycle. Depth is unbounded unless the options set
//! a limit, in which case a path reaching it is rejected before the next
//! producer runs.

use assembly_domain::{EntryState, Error, Registry, Result, Value};
use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::options::AssemblerOptions;

/// Summary of one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Producers invoked during the pass
    pub invoked: usize,
    /// Entries that were already resolved when asked for
    pub memoized: usize,
}

/// Resolves pending entries of a registry in dependency order
pub struct Resolver<'a> {
    registry: &'a mut Registry,
    options: AssemblerOptions,
    path: IndexSet<String>,
    report: ResolutionReport,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a mut Registry, options: AssemblerOptions) -> Self {
        Self {
            registry,
            options,
            path: IndexSet::new(),
            report: ResolutionReport::default(),
        }
    }

    /// Resolve every pending entry
    ///
    /// Entries resolved before a failure stay resolved.
    pub fn resolve_all(mut self) -> Result<ResolutionReport> {
        let pending = self.registry.pending();
        debug!(pending = pending.len(), "Assembling entries");

        for name in pending {
            self.resolve(&name, None)?;
        }

        debug!(
            invoked = self.report.invoked,
            memoized = self.report.memoized,
            "Assembly complete"
        );
        Ok(self.report)
    }

    fn resolve(&mut self, name: &str, required_by: Option<&str>) -> Result<Value> {
        let entry = self.registry.get(name).ok_or_else(|| match required_by {
            Some(by) => Error::missing_for(name, by),
            None => Error::unknown_dependency(name),
        })?;

        let producer = match entry.state() {
            EntryState::Resolved(value) => {
                if required_by.is_some() {
                    trace!(entry = name, "Reusing resolved value");
                    self.report.memoized += 1;
                }
                return Ok(value.clone());
            }
            EntryState::Unresolved(producer) => producer.clone(),
        };

        if self.path.contains(name) {
            let mut cycle: Vec<String> = self.path.iter().cloned().collect();
            cycle.push(name.to_string());
            return Err(Error::CyclicDependency { cycle });
        }
        if let Some(limit) = self.options.max_depth
            && self.path.len() >= limit
        {
            return Err(Error::DepthExceeded {
                name: name.to_string(),
                limit,
            });
        }

        self.path.insert(name.to_string());
        let args = self.arguments(name, producer.dependencies());
        self.path.pop();
        let args = args?;

        debug!(entry = name, arguments = args.len(), "Invoking producer");
        let value = producer.invoke(name, &args)?;
        self.registry.settle(name, value.clone())?;
        self.report.invoked += 1;
        Ok(value)
    }

    fn arguments(&mut self, name: &str, dependencies: &[String]) -> Result<Vec<Value>> {
        dependencies
            .iter()
            .map(|dependency| self.resolve(dependency, Some(name)))
            .collect()
    }
}
