//! Parsing of composite `sample_tags` strings
//!
//! A tag string is a comma-separated list of `Label (qualifier): value`
//! fragments. Fields are located by searching for the fragment whose text
//! contains a known label, then taking the trimmed text after the first
//! `:` of that fragment.

use crate::constants::tags::{FRAGMENT_SEPARATOR, VALUE_SEPARATOR};

/// Reasons a tag field could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookupError {
    /// No fragment contains the label
    NotFound { label: String },
    /// The matching fragment has no label/value separator
    MissingValue { label: String, fragment: String },
    /// The matching fragment has a separator but nothing after it
    EmptyValue { label: String },
}

impl std::fmt::Display for TagLookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagLookupError::NotFound { label } => write!(f, "{} is not in the tag list", label),
            TagLookupError::MissingValue { label, fragment } => write!(
                f,
                "Fragment '{}' for {} has no '{}' separator",
                fragment, label, VALUE_SEPARATOR
            ),
            TagLookupError::EmptyValue { label } => write!(f, "{} has an empty value", label),
        }
    }
}

impl std::error::Error for TagLookupError {}

/// An ordered list of tag fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagList {
    fragments: Vec<String>,
}

impl TagList {
    /// Split a tag string into its fragments, preserving order
    pub fn parse(text: &str) -> Self {
        Self {
            fragments: text
                .split(FRAGMENT_SEPARATOR)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Index of the first fragment containing `label`
    pub fn position(&self, label: &str) -> Result<usize, TagLookupError> {
        self.fragments
            .iter()
            .position(|fragment| fragment.contains(label))
            .ok_or_else(|| not_found(label))
    }

    /// Index of the last fragment containing `label`
    ///
    /// The index refers to the list in its original order.
    pub fn rposition(&self, label: &str) -> Result<usize, TagLookupError> {
        self.fragments
            .iter()
            .rposition(|fragment| fragment.contains(label))
            .ok_or_else(|| not_found(label))
    }

    /// Value of the first fragment containing `label`
    pub fn value(&self, label: &str) -> Result<&str, TagLookupError> {
        let index = self.position(label)?;
        fragment_value(&self.fragments[index], label)
    }

    /// Value of the last fragment containing `label`
    pub fn last_value(&self, label: &str) -> Result<&str, TagLookupError> {
        let index = self.rposition(label)?;
        fragment_value(&self.fragments[index], label)
    }
}

/// Extract the trimmed value after the first separator of a fragment
pub fn fragment_value<'a>(fragment: &'a str, label: &str) -> Result<&'a str, TagLookupError> {
    let (_, value) =
        fragment
            .split_once(VALUE_SEPARATOR)
            .ok_or_else(|| TagLookupError::MissingValue {
                label: label.to_string(),
                fragment: fragment.to_string(),
            })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(TagLookupError::EmptyValue {
            label: label.to_string(),
        });
    }

    Ok(value)
}

fn not_found(label: &str) -> TagLookupError {
    TagLookupError::NotFound {
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_fragment_order() {
        let tags = TagList::parse("Age (Range): 30-40,Biological Sex: Male");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.fragments()[0], "Age (Range): 30-40");
        assert_eq!(tags.fragments()[1], "Biological Sex: Male");
    }

    #[test]
    fn test_parse_empty_string() {
        let tags = TagList::parse("");
        assert_eq!(tags.len(), 1);
        assert!(tags.value("Age (Range)").is_err());
    }

    #[test]
    fn test_position_first_match_wins() {
        let tags = TagList::parse("stage: I,Tumor stage: II,Other: x");
        assert_eq!(tags.position("stage").unwrap(), 0);
        assert_eq!(tags.position("Other").unwrap(), 2);
    }

    #[test]
    fn test_rposition_returns_last_match_in_original_order() {
        let tags = TagList::parse("stage: I,Tumor stage: II,Other: x");
        assert_eq!(tags.rposition("stage").unwrap(), 1);
        assert_eq!(tags.rposition("Other").unwrap(), 2);
    }

    #[test]
    fn test_position_not_found() {
        let tags = TagList::parse("Age (Range): 30-40");
        assert_eq!(
            tags.position("Diagnosis"),
            Err(TagLookupError::NotFound {
                label: "Diagnosis".to_string()
            })
        );
        assert!(tags.rposition("Diagnosis").is_err());
    }

    #[test]
    fn test_value_trims_whitespace() {
        let tags = TagList::parse(" Age (Range):   30-40  , Biological Sex: Male");
        assert_eq!(tags.value("Age (Range)").unwrap(), "30-40");
        assert_eq!(tags.value("Biological Sex").unwrap(), "Male");
    }

    #[test]
    fn test_value_keeps_text_after_first_separator() {
        let tags = TagList::parse("Tissue Source: Site: Lung");
        assert_eq!(tags.value("Tissue Source").unwrap(), "Site: Lung");
    }

    #[test]
    fn test_last_value() {
        let tags = TagList::parse("stage: I,Tumor stage: II");
        assert_eq!(tags.value("stage").unwrap(), "I");
        assert_eq!(tags.last_value("stage").unwrap(), "II");
    }

    #[test]
    fn test_value_missing_separator() {
        let tags = TagList::parse("Diagnosis Lung cancer");
        assert!(matches!(
            tags.value("Diagnosis"),
            Err(TagLookupError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_value_empty_after_separator() {
        let tags = TagList::parse("Diagnosis:   ");
        assert_eq!(
            tags.value("Diagnosis"),
            Err(TagLookupError::EmptyValue {
                label: "Diagnosis".to_string()
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = TagLookupError::NotFound {
            label: "stage".to_string(),
        };
        assert_eq!(err.to_string(), "stage is not in the tag list");
    }
}
