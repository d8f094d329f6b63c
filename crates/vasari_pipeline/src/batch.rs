//! Task-matrix fan-out over personas and integrations.

use crate::GenerationPipeline;
use derive_getters::Getters;
use derive_new::new;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;
use vasari_core::{ArtifactKind, GenerationContext, GenerationRequest, GenerationResult};
use vasari_error::{VasariError, VasariResult};
use vasari_interface::VasariDriver;

/// Options for task-matrix fan-out.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Upper bound on in-flight completion calls.
    pub concurrency: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { concurrency: 4 }
    }
}

/// One cell address in a task matrix.
///
/// Ordering is persona first, then integration, which fixes the iteration
/// order of [`TaskMatrix`] no matter when each call completed.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, new, Getters,
)]
pub struct TaskKey {
    /// Persona the tasks are generated for
    persona: String,
    /// Integration the tasks are generated against
    integration: String,
}

/// Integration-task results for every persona × integration pair.
///
/// Grouping by pair is what callers display; the map keeps key order stable
/// across runs regardless of completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskMatrix {
    tasks: BTreeMap<TaskKey, GenerationResult>,
}

impl TaskMatrix {
    /// Look up one cell.
    pub fn get(&self, persona: &str, integration: &str) -> Option<&GenerationResult> {
        self.tasks
            .get(&TaskKey::new(persona.to_string(), integration.to_string()))
    }

    /// Iterate cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TaskKey, &GenerationResult)> {
        self.tasks.iter()
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &TaskKey> {
        self.tasks.keys()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when no pairs were requested.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<D: VasariDriver> GenerationPipeline<D> {
    /// Generate integration tasks for every persona × integration pair.
    ///
    /// Calls run on a bounded worker pool (`options.concurrency`, minimum
    /// one) and the results are recombined by [`TaskKey`], so the matrix is
    /// deterministic however the calls interleave. Any failing pair fails
    /// the whole matrix; an empty persona or integration list yields an
    /// empty matrix without touching the driver.
    #[instrument(
        skip(self, business_description, personas, integrations, options),
        fields(
            personas = personas.len(),
            integrations = integrations.len(),
            concurrency = options.concurrency
        )
    )]
    pub async fn generate_task_matrix(
        &self,
        business_description: &str,
        personas: &[String],
        integrations: &[String],
        options: &BatchOptions,
    ) -> VasariResult<TaskMatrix> {
        let pairs: Vec<(String, String)> = personas
            .iter()
            .flat_map(|persona| {
                integrations
                    .iter()
                    .map(move |integration| (persona.clone(), integration.clone()))
            })
            .collect();

        let concurrency = options.concurrency.max(1);

        let tasks: BTreeMap<TaskKey, GenerationResult> = stream::iter(pairs)
            .map(|(persona, integration)| {
                let request =
                    GenerationRequest::new(ArtifactKind::IntegrationTask, business_description)
                        .with_context(
                            GenerationContext::new()
                                .with_persona(&persona)
                                .with_integration(&integration),
                        );
                async move {
                    let result = self.generate(&request).await?;
                    Ok::<_, VasariError>((TaskKey::new(persona, integration), result))
                }
            })
            .buffer_unordered(concurrency)
            .try_collect()
            .await?;

        Ok(TaskMatrix { tasks })
    }
}
