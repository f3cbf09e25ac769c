// Ordered gate pipeline and the runner that executes it against the data services

use std::fmt;
use std::time::Instant;

use crate::services::Services;

use super::context::GateContext;
use super::stage::{Halt, Stage};

/// Named, ordered list of stages guarding one route
pub struct Pipeline {
    name: &'static str,
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(name: &'static str) -> Self {
        Self { name, stages: Vec::new() }
    }

    /// Append a stage; stages run in the order they are added
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        tracing::trace!("Pipeline '{}' registered stage '{}' ({:?})", self.name, stage.name(), stage.kind());
        self.stages.push(Box::new(stage));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Whether any stage needs the request body
    pub fn reads_body(&self) -> bool {
        self.stages.iter().any(|stage| stage.reads_body())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Runs gate pipelines against an explicit set of data services.
#[derive(Clone, Debug)]
pub struct Gatekeeper {
    services: Services,
}

impl Gatekeeper {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    /// Execute every stage in order, stopping at the first halt
    pub fn run(&self, pipeline: &Pipeline, ctx: &mut GateContext) -> Result<(), Halt> {
        let start_time = Instant::now();
        tracing::debug!("Gate pipeline '{}' starting with {} stages", pipeline.name, pipeline.len());

        for stage in &pipeline.stages {
            let stage_start = Instant::now();
            let result = stage.check(ctx, &self.services);
            let elapsed = stage_start.elapsed();

            match result {
                Ok(()) => {
                    tracing::debug!("Stage: {} passed in {:?}", stage.name(), elapsed);
                }
                Err(halt) => {
                    match &halt {
                        Halt::Notice(message) => {
                            tracing::info!("Pipeline '{}' halted at {}: {}", pipeline.name, stage.name(), message);
                        }
                        Halt::Reject(error) if error.status_code() >= 500 => {
                            tracing::error!("Pipeline '{}' failed at {}: {}", pipeline.name, stage.name(), error);
                        }
                        Halt::Reject(error) => {
                            tracing::warn!(
                                "Pipeline '{}' rejected at {} with {}: {}",
                                pipeline.name,
                                stage.name(),
                                error.status_code(),
                                error
                            );
                        }
                    }
                    return Err(halt);
                }
            }
        }

        tracing::debug!("Gate pipeline '{}' passed in {:?}", pipeline.name, start_time.elapsed());
        Ok(())
    }
}
