//! CLI structure for the vasari binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vasari_core::{ArtifactKind, ResponseFormat};

/// Command-line arguments for the vasari binary.
#[derive(Parser, Debug)]
#[command(name = "vasari")]
#[command(about = "Generate backlog artifacts from a business description")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML client configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key, overriding the OPENAI_KEY environment variable
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Model name, overriding the configured model
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one artifact list as a checklist
    Generate {
        /// Artifact kind to generate
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Business description driving the generation
        #[arg(long)]
        description: String,

        /// Selected persona (required for integration tasks)
        #[arg(long)]
        persona: Option<String>,

        /// Selected 3rd party integration (required for integration tasks)
        #[arg(long)]
        integration: Option<String>,

        /// Selected component (required for epics and user stories)
        #[arg(long)]
        component: Option<String>,

        /// Selected epic (required for user stories)
        #[arg(long)]
        epic: Option<String>,

        /// Reply shape requested from the model
        #[arg(long, value_enum, default_value = "json-object")]
        format: FormatArg,
    },

    /// Generate integration tasks for every persona × integration pair
    Tasks {
        /// Business description driving the generation
        #[arg(long)]
        description: String,

        /// Persona to cover (repeatable)
        #[arg(long = "persona", required = true)]
        personas: Vec<String>,

        /// 3rd party integration to cover (repeatable)
        #[arg(long = "integration", required = true)]
        integrations: Vec<String>,

        /// Upper bound on in-flight completion calls
        #[arg(long, default_value_t = 4)]
        concurrency: usize,
    },
}

/// Artifact kind accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    /// Application personas
    Persona,
    /// 3rd party integrations
    Integration,
    /// Sub-applications of the product
    Component,
    /// Epics within a component
    Epic,
    /// User stories within a component and epic
    UserStory,
    /// Tasks for a persona and integration pair
    IntegrationTask,
}

impl From<KindArg> for ArtifactKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Persona => ArtifactKind::Persona,
            KindArg::Integration => ArtifactKind::Integration,
            KindArg::Component => ArtifactKind::Component,
            KindArg::Epic => ArtifactKind::Epic,
            KindArg::UserStory => ArtifactKind::UserStory,
            KindArg::IntegrationTask => ArtifactKind::IntegrationTask,
        }
    }
}

/// Response format accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    /// Strict JSON object with a single `data` key
    JsonObject,
    /// Legacy quoted-bracket array
    LegacyBracket,
}

impl From<FormatArg> for ResponseFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::JsonObject => ResponseFormat::JsonObject,
            FormatArg::LegacyBracket => ResponseFormat::LegacyBracket,
        }
    }
}
