//! Single-word operations.

use super::{
    DEFAULT_TARGET_PATH, INCLUDE_TAGS, LIMIT, ParamSpec, SKIP, ToolDefinition, USE_CANONICAL,
    USE_CANONICAL_A,
};

pub static TOP_EXAMPLE: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_top_example",
    summary: "Returns a top example for a word",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to fetch examples for"),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
    ],
};

pub static ETYMOLOGIES: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_etymologies",
    summary: "Fetches etymology data",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to return"),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
    ],
};

pub static SCRABBLE_SCORE: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_scrabble_score",
    summary: "Returns the Scrabble score for a word",
    target_path: DEFAULT_TARGET_PATH,
    params: &[ParamSpec::optional("word", "Word to get scrabble score for.")],
};

pub static PRONUNCIATIONS: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_pronunciations",
    summary: "Returns text pronunciations for a given word",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to get pronunciations for"),
        ParamSpec::optional("useCanonical", USE_CANONICAL_A),
        ParamSpec::optional("sourceDictionary", "Get from a single dictionary"),
        ParamSpec::optional("typeFormat", "Text pronunciation type"),
        ParamSpec::optional("limit", LIMIT),
    ],
};

pub static DEFINITIONS: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_definitions",
    summary: "Return definitions for a word",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to return definitions for"),
        ParamSpec::optional("partOfSpeech", "CSV list of part-of-speech types"),
        ParamSpec::optional("includeRelated", "Return related words with definitions"),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
        ParamSpec::optional("includeTags", INCLUDE_TAGS),
        ParamSpec::optional("limit", LIMIT),
        ParamSpec::optional(
            "sourceDictionaries",
            "Source dictionary to return definitions from. If 'all' is received, results are \
             returned from all sources. If multiple values are received (e.g. \
             'century,wiktionary'), results are returned from the first specified dictionary \
             that has definitions. If left blank, results are returned from the first \
             dictionary that has definitions. By default, dictionaries are searched in this \
             order: ahd-5, wiktionary, webster, century, wordnet",
        ),
    ],
};

pub static HYPHENATION: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_hyphenation",
    summary: "Returns syllable information for a word",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to get syllables for"),
        ParamSpec::optional("useCanonical", USE_CANONICAL_A),
        ParamSpec::optional(
            "sourceDictionary",
            "Get from a single dictionary. Valid options: ahd-5, century, wiktionary, webster, \
             and wordnet.",
        ),
        ParamSpec::optional("limit", LIMIT),
    ],
};

// The two relationship descriptions are swapped in the upstream API docs;
// they are served as published.
pub static RELATED_WORDS: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_related_words",
    summary: "Given a word as a string, returns relationships from the Word Graph",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to fetch relationships for"),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
        ParamSpec::optional(
            "relationshipTypes",
            "Limits the total results per type of relationship type",
        ),
        ParamSpec::optional(
            "limitPerRelationshipType",
            "Restrict to the supplied relationship types",
        ),
    ],
};

pub static AUDIO: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_audio",
    summary: "Fetches audio metadata for a word.",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to get audio for."),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
        ParamSpec::optional("limit", LIMIT),
    ],
};

pub static FREQUENCY: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_frequency",
    summary: "Returns word usage over time",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to return"),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
        ParamSpec::optional("startYear", "Starting Year"),
        ParamSpec::optional("endYear", "Ending Year"),
    ],
};

pub static PHRASES: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_phrases",
    summary: "Fetches bi-gram phrases for a word",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to fetch phrases for"),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
        ParamSpec::optional("limit", LIMIT),
        ParamSpec::optional("wlmi", "Minimum WLMI for the phrase"),
    ],
};

pub static EXAMPLES: ToolDefinition = ToolDefinition {
    name: "get_word_json_word_examples",
    summary: "Returns examples for a word",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("word", "Word to return examples for"),
        ParamSpec::optional(
            "includeDuplicates",
            "Show duplicate examples from different sources",
        ),
        ParamSpec::optional("useCanonical", USE_CANONICAL),
        ParamSpec::optional("skip", SKIP),
        ParamSpec::optional("limit", LIMIT),
    ],
};
