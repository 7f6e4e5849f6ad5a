use serde::{Deserialize, Serialize};

/// One pronunciation substitution rule, parsed and normalized from a single
/// JDF record line.
///
/// `None` in `language`, `synthesizer`, or `voice` is the "unspecified"
/// sentinel: the source field was either empty or the `*` wildcard. A Rule
/// only exists fully populated; a line that cannot yield every field yields
/// no Rule at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The mis-pronounced source text or pattern. Never empty.
    pub in_word: String,
    /// The replacement pronunciation text, sound tags already stripped.
    /// Never empty.
    pub out_word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Rule {
    /// Serialize back into the JDF record grammar using `delimiter`.
    ///
    /// Unspecified fields become the `*` wildcard, and the discarded
    /// output-language slot is always written as `*`. Re-parsing the
    /// returned line yields a Rule equal to `self`.
    pub fn to_line(&self, delimiter: char) -> String {
        let d = delimiter;
        format!(
            "{d}{}{d}{}{d}{}{d}{}{d}{}{d}*{d}{}{d}",
            self.in_word,
            self.out_word,
            wildcard(&self.language),
            wildcard(&self.synthesizer),
            wildcard(&self.voice),
            if self.case_sensitive { '1' } else { '0' },
        )
    }
}

fn wildcard(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("*")
}
