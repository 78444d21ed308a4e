//! Actor domain models.
//!
//! An actor is a capability that knows how to execute one category of task.
//! Six categories are built in; boards may additionally carry user-defined
//! actors, registered as [`CustomActorDefinition`]s and resolved dynamically
//! at dispatch time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of actor a task is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    /// Breaks a board's goal into concrete tasks
    Planner,
    /// Gathers sources and background material
    Researcher,
    /// Analyzes data and intermediate results
    Analyst,
    /// Writes and executes code
    Coder,
    /// Assembles other tasks' results into the document
    Composer,
    /// Produces prose
    Writer,
    /// User-defined actor, resolved through the board's definitions
    Custom,
}

impl Default for ActorType {
    fn default() -> Self {
        Self::Planner
    }
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planner => "planner",
            Self::Researcher => "researcher",
            Self::Analyst => "analyst",
            Self::Coder => "coder",
            Self::Composer => "composer",
            Self::Writer => "writer",
            Self::Custom => "custom",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "planner" => Some(Self::Planner),
            "researcher" => Some(Self::Researcher),
            "analyst" => Some(Self::Analyst),
            "coder" => Some(Self::Coder),
            "composer" => Some(Self::Composer),
            "writer" => Some(Self::Writer),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Whether this type resolves through the dynamic custom-actor path.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }

    /// The six statically resolved actor types.
    pub fn builtin() -> [ActorType; 6] {
        [
            Self::Planner,
            Self::Researcher,
            Self::Analyst,
            Self::Coder,
            Self::Composer,
            Self::Writer,
        ]
    }
}

/// Per-actor-type configuration held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Disabled types fail dispatch with a "disabled" reason.
    pub enabled: bool,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// A user-registered actor definition.
///
/// The surrounding application stores these as markdown files with YAML
/// frontmatter; [`CustomActorDefinition::parse`] reads that format:
///
/// ```markdown
/// ---
/// name: fact-checker
/// description: Verifies claims against sources
/// enabled: true
/// delegates:
///   - researcher
/// ---
///
/// You are a fact checker...
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomActorDefinition {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Disabled definitions fail dispatch with a "disabled" reason.
    pub enabled: bool,
    /// Built-in actor names this definition may delegate to.
    pub delegates: Vec<String>,
    /// The markdown body after the closing `---`.
    pub prompt: String,
}

impl CustomActorDefinition {
    /// Create a new enabled definition.
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            enabled: true,
            delegates: Vec::new(),
            prompt: prompt.into(),
        }
    }

    /// Disable the definition.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Parse a definition file into a `CustomActorDefinition`.
    ///
    /// Expected format: YAML frontmatter between `---` markers, followed by
    /// the markdown body which becomes the prompt.
    pub fn parse(content: &str) -> Result<CustomActorDefinition, String> {
        let trimmed = content.trim();

        if !trimmed.starts_with("---") {
            return Err("Actor definition must start with YAML frontmatter (---)".to_string());
        }

        let after_first = &trimmed[3..];
        let closing_idx = after_first
            .find("\n---")
            .ok_or_else(|| "Missing closing --- for YAML frontmatter".to_string())?;

        let yaml_str = after_first[..closing_idx].trim();
        let body_start = closing_idx + 4; // skip "\n---"
        let prompt = after_first[body_start..].trim().to_string();

        let yaml_value: serde_yaml::Value = serde_yaml::from_str(yaml_str)
            .map_err(|e| format!("Failed to parse YAML frontmatter: {}", e))?;

        let mapping = yaml_value
            .as_mapping()
            .ok_or_else(|| "YAML frontmatter must be a mapping".to_string())?;

        let field = |key: &str| mapping.get(serde_yaml::Value::String(key.to_string()));

        let name = field("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing required field: name".to_string())?
            .to_lowercase();

        let id = field("id")
            .and_then(|v| v.as_str())
            .map(|s| Uuid::parse_str(s).map_err(|e| format!("Invalid id: {}", e)))
            .transpose()?
            .unwrap_or_else(Uuid::new_v4);

        let description = field("description")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let enabled = field("enabled").and_then(|v| v.as_bool()).unwrap_or(true);

        let delegates = field("delegates")
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|v| v.as_str().map(str::to_lowercase))
                    .collect()
            })
            .unwrap_or_default();

        Ok(CustomActorDefinition {
            id,
            name,
            description,
            enabled,
            delegates,
            prompt,
        })
    }
}
