use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Separators splitting a tag value into its primary segment and options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
    /// Separator used by tags without an override
    pub default: String,

    /// Per tag name overrides. Deserialized entries are merged over the
    /// default ones; an empty separator switches a default override off.
    #[serde(deserialize_with = "merge_overrides")]
    pub overrides: IndexMap<String, String>,
}

impl Default for Separators {
    fn default() -> Self {
        Separators {
            default: ";".to_string(),
            overrides: default_overrides(),
        }
    }
}

/// `db` tags split their options on `,`.
fn default_overrides() -> IndexMap<String, String> {
    IndexMap::from([("db".to_string(), ",".to_string())])
}

fn merge_overrides<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut overrides = default_overrides();
    overrides.extend(IndexMap::<String, String>::deserialize(deserializer)?);
    Ok(overrides)
}

impl Separators {
    pub fn with_override(mut self, tag: impl Into<String>, separator: impl Into<String>) -> Self {
        self.overrides.insert(tag.into(), separator.into());
        self
    }

    /// Separator for `tag`. Empty overrides are ignored.
    pub fn for_tag(&self, tag: &str) -> &str {
        match self.overrides.get(tag) {
            Some(separator) if !separator.is_empty() => separator,
            _ => &self.default,
        }
    }
}

/// A tag value split into its segments.
#[derive(Debug, PartialEq)]
pub(crate) struct ParsedTag<'a> {
    pub(crate) primary: &'a str,
    pub(crate) options: Vec<TagOption<'a>>,
}

#[derive(Debug, PartialEq)]
pub(crate) enum TagOption<'a> {
    /// `key=value`
    Pair(&'a str, &'a str),

    /// A segment without `=`
    Flag(&'a str),
}

impl<'a> ParsedTag<'a> {
    pub(crate) fn parse(raw: &'a str, separator: &str) -> ParsedTag<'a> {
        let mut segments = raw.split(separator);
        let primary = segments.next().unwrap_or_default();

        let options = segments
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => TagOption::Pair(key, value),
                None => TagOption::Flag(segment),
            })
            .collect();

        ParsedTag { primary, options }
    }
}

/// First comma-separated segment of a `json` tag.
pub(crate) fn json_name(raw: &str) -> &str {
    raw.split(',').next().unwrap_or_default()
}
