//! The persona's tools.

use std::fmt;

/// Description of one tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolArgument {
    /// Argument name.
    pub name: &'static str,
    /// JSON Schema type (e.g. "string").
    pub arg_type: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether the argument is required.
    pub required: bool,
}

/// Tools exposed through `tools/list` and `tools/call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonaTool {
    /// Returns the personality record.
    PersonalityInfo,
    /// Runs the structured-thinking template over a problem.
    StructuredThinking,
}

impl PersonaTool {
    /// All tools, in listing order.
    pub const ALL: [PersonaTool; 2] = [Self::PersonalityInfo, Self::StructuredThinking];

    /// Looks a tool up by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PersonalityInfo => "get_personality_info",
            Self::StructuredThinking => "structured_thinking",
        }
    }

    /// One-line description shown in `tools/list`.
    pub fn description(self) -> &'static str {
        match self {
            Self::PersonalityInfo => "Get information about Ivan's personality traits",
            Self::StructuredThinking => "Apply Ivan's structured decision-making process",
        }
    }

    /// Declared arguments, used to build the JSON Schema in `tools/list`.
    pub fn arguments(self) -> &'static [ToolArgument] {
        match self {
            Self::PersonalityInfo => &[],
            Self::StructuredThinking => &[ToolArgument {
                name: "problem",
                arg_type: "string",
                description: "Problem to analyze",
                required: true,
            }],
        }
    }
}

impl fmt::Display for PersonaTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
