//! Follow-up steps for the calling assistant.
//!
//! Descriptive suggestions only. The list is never empty: an empty result is a
//! valid answer that still needs codebase and web research.

use blueprint_core::models::EntityKind;

/// What the guidance generator needs to know about a research result.
#[derive(Debug, Clone, Default)]
pub struct GuidanceInput<'a> {
    pub technologies: &'a [String],
    pub pattern_count: usize,
    pub mandatory_rule_count: usize,
    pub research_count: usize,
    pub include_research: bool,
    pub fallback_kinds: &'a [EntityKind],
    pub failed_kinds: &'a [EntityKind],
}

pub fn generate(input: &GuidanceInput<'_>) -> Vec<String> {
    let mut steps: Vec<String> = vec![
        "Search the codebase for existing implementations of similar features \
         and follow their conventions."
            .into(),
        "Identify the files and modules this feature will touch before writing code.".into(),
        "Locate the existing test suites that cover those modules and mirror their style.".into(),
    ];

    if input.technologies.is_empty() {
        steps.push(
            "Consult the current official documentation for the project's stack; \
             naming the stack in the request sharpens results."
                .into(),
        );
    } else {
        steps.push(format!(
            "Consult the current official documentation for {} for API changes \
             since the stored notes were written.",
            input.technologies.join(", ")
        ));
    }

    if input.pattern_count == 0 {
        steps.push(
            "No stored implementation patterns matched: search the web for \
             reference implementations and proven approaches."
                .into(),
        );
    }

    if input.mandatory_rule_count == 0 {
        steps.push(
            "No mandatory project rules matched: confirm coding standards with \
             the project's contributing guide or linters."
                .into(),
        );
    }

    if !input.include_research {
        steps.push(
            "Stored research was skipped: gather up-to-date documentation and \
             known pitfalls manually."
                .into(),
        );
    } else if input.research_count == 0 {
        steps.push(
            "No stored research notes matched: collect current documentation links \
             and common pitfalls for the stack."
                .into(),
        );
    }

    if !input.failed_kinds.is_empty() {
        steps.push(format!(
            "Knowledge for {} could not be retrieved: treat this guidance as partial \
             and verify those areas by hand.",
            kinds_list(input.failed_kinds)
        ));
    } else if !input.fallback_kinds.is_empty() {
        steps.push(format!(
            "Similarity search was unavailable for {}: results are ranked by track \
             record only and the vector index likely needs rebuilding.",
            kinds_list(input.fallback_kinds)
        ));
    }

    steps
}

fn kinds_list(kinds: &[EntityKind]) -> String {
    kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_still_yields_guidance() {
        let steps = generate(&GuidanceInput {
            include_research: true,
            ..Default::default()
        });
        assert!(steps.len() >= 5);
        assert!(steps.iter().all(|s| !s.trim().is_empty()));
        assert!(steps.iter().any(|s| s.contains("reference implementations")));
    }

    #[test]
    fn rich_result_keeps_base_steps_only() {
        let tech = vec!["rust".to_string()];
        let steps = generate(&GuidanceInput {
            technologies: &tech,
            pattern_count: 3,
            mandatory_rule_count: 2,
            research_count: 1,
            include_research: true,
            fallback_kinds: &[],
            failed_kinds: &[],
        });
        assert_eq!(steps.len(), 4);
        assert!(steps[3].contains("rust"));
        assert!(steps[3].contains("official documentation"));
    }

    #[test]
    fn degraded_kinds_are_named() {
        let steps = generate(&GuidanceInput {
            pattern_count: 1,
            mandatory_rule_count: 1,
            research_count: 1,
            include_research: true,
            fallback_kinds: &[EntityKind::Rule],
            ..Default::default()
        });
        assert!(steps.last().unwrap().contains("rule"));
    }
}
