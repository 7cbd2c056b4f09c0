//! Generation pipeline driver
//!
//! Runs eligibility, tag assignment, model building and emission for every
//! generation root. Roots share nothing mutable, so they are processed on a
//! rayon pool when `generator.parallel` is set; a failed or cancelled root is
//! reported without affecting the others.

use crate::attributes::is_generation_root;
use crate::class_emitter::{GenerationUnit, emit_unit};
use crate::descriptor::build_type_descriptor;
use crate::diagnostics::{Diagnostic, analyze};
use crate::eligibility::analyze_root;
use protoshadow_core::{
    CancellationToken, DeclarationGraph, GeneratorConfig, GeneratorError, GeneratorResult,
    TypeNode,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// A root whose generation did not complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootFailure {
    /// Qualified name of the root
    pub root: String,
    pub error: GeneratorError,
}

/// Outcome of a generation pass
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Units in document order of their roots
    pub units: Vec<GenerationUnit>,
    pub failures: Vec<RootFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether any root was aborted by cancellation
    pub fn was_cancelled(&self) -> bool {
        self.failures.iter().any(|f| f.error.is_cancellation())
    }
}

type RootOutcome<'g> = (&'g TypeNode, GeneratorResult<Option<GenerationUnit>>);

/// Generator over one declaration graph
pub struct Generator<'g> {
    graph: &'g DeclarationGraph,
    config: GeneratorConfig,
}

impl<'g> Generator<'g> {
    /// Create a generator; the configuration is validated up front
    pub fn new(graph: &'g DeclarationGraph, config: GeneratorConfig) -> GeneratorResult<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generation roots in document order
    pub fn roots(&self) -> Vec<&'g TypeNode> {
        self.graph
            .iter()
            .filter(|node| is_generation_root(&node.decl, &self.config.attributes))
            .collect()
    }

    /// Generate one root
    ///
    /// Returns `Ok(None)` for types that are not roots or have nothing to shadow.
    pub fn generate_root(
        &self,
        node: &'g TypeNode,
        token: &CancellationToken,
    ) -> GeneratorResult<Option<GenerationUnit>> {
        let Some(analysis) = analyze_root(self.graph, node, &self.config.attributes, token)? else {
            return Ok(None);
        };

        if analysis.candidates.is_empty() {
            debug!(root = %node.qualified_name, "No eligible properties");
            return Ok(None);
        }

        let descriptor = build_type_descriptor(self.graph, &analysis, token)?;
        token.check()?;
        let unit = emit_unit(&descriptor, &self.config)?;

        debug!(
            root = %node.qualified_name,
            output_key = %unit.output_key,
            properties = descriptor.owned_properties.len(),
            "Generated unit"
        );
        Ok(Some(unit))
    }

    /// Generate every root
    pub fn generate(&self, token: &CancellationToken) -> GenerationReport {
        let roots = self.roots();
        debug!(
            roots = roots.len(),
            parallel = self.config.generator.parallel,
            "Starting generation"
        );

        let outcomes = if self.config.generator.parallel {
            self.generate_parallel(&roots, token)
        } else {
            self.generate_sequential(&roots, token)
        };

        let mut report = GenerationReport::default();
        for (node, outcome) in outcomes {
            match outcome {
                Ok(Some(unit)) => report.units.push(unit),
                Ok(None) => {}
                Err(error) => {
                    if error.is_cancellation() {
                        debug!(root = %node.qualified_name, "Generation cancelled");
                    } else {
                        warn!(root = %node.qualified_name, %error, "Generation failed");
                    }
                    report.failures.push(RootFailure {
                        root: node.qualified_name.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            units = report.units.len(),
            failures = report.failures.len(),
            "Generation complete"
        );
        report
    }

    /// Run every diagnostic rule over the graph
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        analyze(self.graph, &self.config)
    }

    fn generate_sequential(
        &self,
        roots: &[&'g TypeNode],
        token: &CancellationToken,
    ) -> Vec<RootOutcome<'g>> {
        roots
            .iter()
            .map(|node| (*node, self.generate_root(*node, token)))
            .collect()
    }

    fn generate_parallel(
        &self,
        roots: &[&'g TypeNode],
        token: &CancellationToken,
    ) -> Vec<RootOutcome<'g>> {
        let run = || -> Vec<RootOutcome<'g>> {
            roots
                .par_iter()
                .map(|node| (*node, self.generate_root(*node, token)))
                .collect()
        };

        match self.config.generator.worker_threads {
            None => run(),
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run),
                Err(error) => {
                    warn!(%error, threads, "Failed to build worker pool, generating sequentially");
                    self.generate_sequential(roots, token)
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "pipeline/pipeline_tests.rs"]
mod pipeline_tests;
