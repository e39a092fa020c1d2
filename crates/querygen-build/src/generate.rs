//! Two-phase generation driver.
//!
//! Resolve-all (resolver, then every registered pass) completes before
//! build-all starts; after that gate the attribute store is only read.

use crate::{
    Error,
    operation::{OperationBuilder, OperationDefinition},
    pass::{ForceLoadPass, Pass},
    prelude::*,
    resolve::{Resolution, resolve},
};
use querygen_config_build::Config;
use tracing::{info, info_span};

///
/// Generation
///
/// Best-effort output of a run, paired with everything worth telling the
/// schema author.
///

#[derive(Debug, Serialize)]
pub struct Generation {
    pub store: AttrStore,
    pub operations: Vec<OperationDefinition>,
    pub diagnostics: Diagnostics,
}

impl Generation {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

///
/// Generator
///

pub struct Generator<'a> {
    pkg: &'a Package,
    config: &'a Config,
    passes: Vec<Box<dyn Pass>>,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(pkg: &'a Package, config: &'a Config) -> Self {
        Self {
            pkg,
            config,
            passes: Vec::new(),
        }
    }

    /// Register a pass; passes run in registration order.
    #[must_use]
    pub fn with_pass(mut self, pass: impl Pass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn run(self) -> Result<Generation, Error> {
        let pkg = self.pkg;
        let naming = &self.config.naming;

        // Phase 1: resolve all
        let Resolution {
            mut store,
            mut diagnostics,
        } = resolve(pkg, naming)?;

        for pass in &self.passes {
            let _span = info_span!("pass", name = pass.name()).entered();
            pass.run(pkg, &mut store, &mut diagnostics)?;
        }

        // Phase 2: build all against the frozen store
        let operations = {
            let _span = info_span!("build", package = pkg.name()).entered();
            OperationBuilder::new(pkg, &store, naming).build_all(&mut diagnostics)
        };

        info!(
            operations = operations.len(),
            errors = diagnostics.count(Severity::Error),
            warnings = diagnostics.count(Severity::Warning),
            "generated"
        );

        Ok(Generation {
            store,
            operations,
            diagnostics,
        })
    }
}

/// Run the default pipeline: resolver, force-load pass, builder.
pub fn generate(pkg: &Package, config: &Config) -> Result<Generation, Error> {
    Generator::new(pkg, config).with_pass(ForceLoadPass).run()
}

///
/// TESTS
///
