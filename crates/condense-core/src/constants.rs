/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "CONDENSE_LOG";

/// Characters that may end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Quote marks accepted as the first character of a new sentence.
pub const SENTENCE_OPENING_QUOTES: [char; 2] = ['"', '\''];
