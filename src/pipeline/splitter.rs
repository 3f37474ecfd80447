/// Placeholder carried in the refutation slot when the model never emitted
/// the section marker. The slot is filled, never silently dropped.
pub const REFUTATION_PLACEHOLDER: &str = "Refutación no generada.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSections {
    pub definition: String,
    /// `None` when the marker was absent from the generated text.
    pub refutation: Option<String>,
}

/// Splits a dual-section generation on its marker.
///
/// Policy: split at the FIRST occurrence. A duplicated marker is malformed
/// output; everything after the first occurrence, further markers included,
/// belongs to the refutation. No marker at all is recoverable: the whole
/// text is the definition and the refutation slot is left empty for the
/// caller to flag.
pub fn split_sections(raw: &str, marker: &str) -> SplitSections {
    match raw.split_once(marker) {
        Some((definition, refutation)) => SplitSections {
            definition: definition.trim().to_string(),
            refutation: Some(refutation.trim().to_string()),
        },
        None => SplitSections {
            definition: raw.trim().to_string(),
            refutation: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::composer::PHILOSOPHICAL_MARKER;

    const MARKER: &str = "Refutación austríaca/liberal:";

    #[test]
    fn single_marker_splits_into_trimmed_parts() {
        let raw = format!("La plusvalía es...\n\n{MARKER}\nLa teoría ignora...");
        let sections = split_sections(&raw, MARKER);
        assert_eq!(sections.definition, "La plusvalía es...");
        assert_eq!(sections.refutation.as_deref(), Some("La teoría ignora..."));
    }

    #[test]
    fn reinserting_the_marker_reconstructs_the_original() {
        let raw = format!("D text\n{MARKER}\nR text");
        let sections = split_sections(&raw, MARKER);
        let rebuilt = format!(
            "{}\n{MARKER}\n{}",
            sections.definition,
            sections.refutation.unwrap()
        );
        assert_eq!(rebuilt, raw);
    }

    #[test]
    fn absent_marker_keeps_full_text_as_definition() {
        let sections = split_sections("  Solo una definición.  ", MARKER);
        assert_eq!(sections.definition, "Solo una definición.");
        assert!(sections.refutation.is_none());
    }

    #[test]
    fn duplicated_marker_splits_at_first_occurrence() {
        let raw = format!("D.{MARKER}R1.{MARKER}R2.");
        let sections = split_sections(&raw, MARKER);
        assert_eq!(sections.definition, "D.");
        assert_eq!(
            sections.refutation.as_deref(),
            Some(&*format!("R1.{MARKER}R2."))
        );
    }

    #[test]
    fn philosophical_marker_scenario() {
        let sections = split_sections(
            "D text\nRefutación filosófica:\nR text",
            PHILOSOPHICAL_MARKER,
        );
        assert_eq!(sections.definition, "D text");
        assert_eq!(sections.refutation.as_deref(), Some("R text"));
    }
}
