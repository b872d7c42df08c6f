//! Tool definitions module.
//!
//! Every tool is a static [`ToolDefinition`]: a name, a one-line summary, a
//! target path and an ordered parameter list. The behaviour is shared and
//! lives in [`ToolPipeline`](super::pipeline::ToolPipeline).
//!
//! - `word` - operations on a single word (`/word.json/...` in the remote API)
//! - `words` - search and discovery operations (`/words.json/...`)

pub mod word;
pub mod words;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde_json::{Value, json};
use std::sync::Arc;

use super::pipeline::ToolPipeline;

/// Target path used by every tool unless overridden in the settings file.
pub const DEFAULT_TARGET_PATH: &str = "/api/unknown";

/// One named parameter of a tool. Values are sent as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl ParamSpec {
    /// An optional parameter; omitted from the request when absent or empty.
    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
        }
    }
}

/// Static description of one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Tool name as registered in MCP. Unique across the catalogue.
    pub name: &'static str,

    /// One-line description shown to clients.
    pub summary: &'static str,

    /// Path appended to the base URL. May contain `{param}` placeholders.
    pub target_path: &'static str,

    /// Parameters in the order they are sent.
    pub params: &'static [ParamSpec],
}

impl ToolDefinition {
    /// JSON schema of the arguments: an object of string properties.
    pub fn input_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .params
            .iter()
            .map(|param| {
                (
                    param.name.to_string(),
                    json!({ "type": "string", "description": param.description }),
                )
            })
            .collect();
        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| Value::from(param.name))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.summary.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute running this tool through `pipeline`.
    pub fn create_route<S>(&'static self, pipeline: Arc<ToolPipeline>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let pipeline = pipeline.clone();
            async move {
                let text = pipeline.invoke_async(self, args).await;
                Ok::<_, McpError>(CallToolResult::success(vec![Content::text(text)]))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Shared parameter descriptions
// ============================================================================

pub(crate) const USE_CANONICAL: &str = "If true will try to return the correct word root ('cats' -> 'cat'). If false returns exactly what was requested.";

pub(crate) const USE_CANONICAL_A: &str = "If true will try to return a correct word root ('cats' -> 'cat'). If false returns exactly what was requested.";

pub(crate) const LIMIT: &str = "Maximum number of results to return";

pub(crate) const SKIP: &str = "Results to skip";

pub(crate) const INCLUDE_TAGS: &str = "Return a closed set of XML tags in response";

pub(crate) const SORT_BY: &str = "Attribute to sort by";

pub(crate) const SORT_ORDER: &str = "Sort direction";

pub(crate) const MIN_CORPUS_COUNT: &str = "Minimum corpus frequency for terms";

pub(crate) const MAX_CORPUS_COUNT: &str = "Maximum corpus frequency for terms";

pub(crate) const MIN_LENGTH: &str = "Minimum word length";

pub(crate) const MAX_LENGTH: &str = "Maximum word length";

pub(crate) const HAS_DICTIONARY_DEF: &str = "Only return words with dictionary definitions";

macro_rules! parts_of_speech {
    ($prefix:literal) => {
        concat!(
            $prefix,
            " (allowable values are noun, adjective, verb, adverb, interjection, pronoun, ",
            "preposition, abbreviation, affix, article, auxiliary-verb, conjunction, ",
            "definite-article, family-name, given-name, idiom, imperative, noun-plural, ",
            "noun-posessive, past-participle, phrasal-prefix, proper-noun, proper-noun-plural, ",
            "proper-noun-posessive, suffix, verb-intransitive, verb-transitive)"
        )
    };
}
pub(crate) use parts_of_speech;

// ============================================================================
// Catalogue
// ============================================================================

/// Every tool served, in listing order.
pub static CATALOGUE: &[&ToolDefinition] = &[
    &word::TOP_EXAMPLE,
    &word::ETYMOLOGIES,
    &word::SCRABBLE_SCORE,
    &word::PRONUNCIATIONS,
    &word::DEFINITIONS,
    &word::HYPHENATION,
    &word::RELATED_WORDS,
    &word::AUDIO,
    &word::FREQUENCY,
    &word::PHRASES,
    &word::EXAMPLES,
    &words::SEARCH,
    &words::REVERSE_DICTIONARY,
    &words::WORD_OF_THE_DAY,
    &words::RANDOM_WORDS,
    &words::RANDOM_WORD,
];

/// Look up a tool by name.
pub fn find(name: &str) -> Option<&'static ToolDefinition> {
    CATALOGUE.iter().copied().find(|tool| tool.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_names_are_unique() {
        let names: HashSet<_> = CATALOGUE.iter().map(|tool| tool.name).collect();
        assert_eq!(CATALOGUE.len(), 16);
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_param_names_are_unique_and_optional() {
        for tool in CATALOGUE {
            let names: HashSet<_> = tool.params.iter().map(|param| param.name).collect();
            assert_eq!(names.len(), tool.params.len(), "duplicate param in {}", tool.name);
            assert!(tool.params.iter().all(|param| !param.required));
            assert_eq!(tool.target_path, DEFAULT_TARGET_PATH);
        }
    }

    #[test]
    fn test_input_schema() {
        let schema = word::AUDIO.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema.get("required").is_none());

        let properties = schema["properties"].as_object().unwrap();
        let keys: Vec<_> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["word", "useCanonical", "limit"]);
        assert_eq!(properties["word"]["type"], "string");
        assert_eq!(properties["word"]["description"], "Word to get audio for.");
    }

    #[test]
    fn test_to_tool() {
        let tool = words::WORD_OF_THE_DAY.to_tool();
        assert_eq!(tool.name, "get_words_json_word_of_the_day");
        assert_eq!(
            tool.description.as_deref(),
            Some("Returns a specific WordOfTheDay")
        );
        assert!(tool.input_schema.contains_key("properties"));
    }

    #[test]
    fn test_find() {
        assert_eq!(
            find("get_word_json_word_definitions").map(|tool| tool.summary),
            Some("Return definitions for a word")
        );
        assert!(find("fs_list_dir").is_none());
    }

    #[test]
    fn test_part_of_speech_description() {
        let description = parts_of_speech!("Only include these comma-delimited parts of speech");
        assert!(description.starts_with("Only include these comma-delimited parts of speech (allowable values are noun, adjective"));
        assert!(description.ends_with("verb-intransitive, verb-transitive)"));
    }
}
