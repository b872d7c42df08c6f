//! Search and discovery operations.

use super::{
    DEFAULT_TARGET_PATH, HAS_DICTIONARY_DEF, INCLUDE_TAGS, LIMIT, MAX_CORPUS_COUNT, MAX_LENGTH,
    MIN_CORPUS_COUNT, MIN_LENGTH, ParamSpec, SKIP, SORT_BY, SORT_ORDER, ToolDefinition,
    parts_of_speech,
};

const INCLUDE_POS_FILTER: &str =
    parts_of_speech!("Only include these comma-delimited parts of speech");

const EXCLUDE_POS_FILTER: &str = parts_of_speech!("Exclude these comma-delimited parts of speech");

const INCLUDE_POS_CSV: &str = parts_of_speech!("CSV part-of-speech values to include");

const EXCLUDE_POS_CSV: &str = parts_of_speech!("CSV part-of-speech values to exclude");

pub static SEARCH: ToolDefinition = ToolDefinition {
    name: "get_words_json_search_query",
    summary: "Searches words",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("allowRegex", "Search term is a Regular Expression"),
        ParamSpec::optional("query", "Search query"),
        ParamSpec::optional("caseSensitive", "Search case sensitive"),
        ParamSpec::optional("includePartOfSpeech", INCLUDE_POS_FILTER),
        ParamSpec::optional("excludePartOfSpeech", EXCLUDE_POS_FILTER),
        ParamSpec::optional("minCorpusCount", MIN_CORPUS_COUNT),
        ParamSpec::optional("maxCorpusCount", MAX_CORPUS_COUNT),
        ParamSpec::optional(
            "minDictionaryCount",
            "Minimum number of dictionary entries for words returned",
        ),
        ParamSpec::optional("maxDictionaryCount", "Maximum dictionary definition count"),
        ParamSpec::optional("minLength", MIN_LENGTH),
        ParamSpec::optional("maxLength", MAX_LENGTH),
        ParamSpec::optional("skip", SKIP),
        ParamSpec::optional("limit", LIMIT),
    ],
};

pub static REVERSE_DICTIONARY: ToolDefinition = ToolDefinition {
    name: "get_words_json_reverse_dictionary",
    summary: "Reverse dictionary search",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("query", "Search term"),
        ParamSpec::optional("findSenseForWord", "Restricts words and finds closest sense"),
        ParamSpec::optional(
            "includeSourceDictionaries",
            "Only include these comma-delimited source dictionaries",
        ),
        ParamSpec::optional(
            "excludeSourceDictionaries",
            "Exclude these comma-delimited source dictionaries",
        ),
        ParamSpec::optional("includePartOfSpeech", INCLUDE_POS_FILTER),
        ParamSpec::optional("excludePartOfSpeech", EXCLUDE_POS_FILTER),
        ParamSpec::optional("expandTerms", "Expand terms"),
        ParamSpec::optional("includeTags", INCLUDE_TAGS),
        ParamSpec::optional("sortBy", SORT_BY),
        ParamSpec::optional("sortOrder", SORT_ORDER),
        ParamSpec::optional("skip", SKIP),
        ParamSpec::optional("minCorpusCount", MIN_CORPUS_COUNT),
        ParamSpec::optional("maxCorpusCount", MAX_CORPUS_COUNT),
        ParamSpec::optional("minLength", MIN_LENGTH),
        ParamSpec::optional("maxLength", MAX_LENGTH),
        ParamSpec::optional("limit", LIMIT),
    ],
};

pub static WORD_OF_THE_DAY: ToolDefinition = ToolDefinition {
    name: "get_words_json_word_of_the_day",
    summary: "Returns a specific WordOfTheDay",
    target_path: DEFAULT_TARGET_PATH,
    params: &[ParamSpec::optional("date", "Fetches by date in yyyy-MM-dd")],
};

pub static RANDOM_WORDS: ToolDefinition = ToolDefinition {
    name: "get_words_json_random_words",
    summary: "Returns an array of random WordObjects",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("hasDictionaryDef", HAS_DICTIONARY_DEF),
        ParamSpec::optional("includePartOfSpeech", INCLUDE_POS_CSV),
        ParamSpec::optional("excludePartOfSpeech", EXCLUDE_POS_CSV),
        ParamSpec::optional("sortBy", SORT_BY),
        ParamSpec::optional("sortOrder", SORT_ORDER),
        ParamSpec::optional("minCorpusCount", MIN_CORPUS_COUNT),
        ParamSpec::optional("maxCorpusCount", MAX_CORPUS_COUNT),
        ParamSpec::optional("minDictionaryCount", "Minimum dictionary count"),
        ParamSpec::optional("maxDictionaryCount", "Maximum dictionary count"),
        ParamSpec::optional("minLength", MIN_LENGTH),
        ParamSpec::optional("maxLength", MAX_LENGTH),
        ParamSpec::optional("limit", LIMIT),
    ],
};

pub static RANDOM_WORD: ToolDefinition = ToolDefinition {
    name: "get_words_json_random_word",
    summary: "Returns a single random WordObject",
    target_path: DEFAULT_TARGET_PATH,
    params: &[
        ParamSpec::optional("hasDictionaryDef", HAS_DICTIONARY_DEF),
        ParamSpec::optional("includePartOfSpeech", INCLUDE_POS_CSV),
        ParamSpec::optional("excludePartOfSpeech", EXCLUDE_POS_CSV),
        ParamSpec::optional("minCorpusCount", MIN_CORPUS_COUNT),
        ParamSpec::optional("maxCorpusCount", MAX_CORPUS_COUNT),
        ParamSpec::optional("minDictionaryCount", "Minimum dictionary count"),
        ParamSpec::optional("maxDictionaryCount", "Maximum dictionary count"),
        ParamSpec::optional("minLength", MIN_LENGTH),
        ParamSpec::optional("maxLength", MAX_LENGTH),
    ],
};
