//! Section renderers. Each returns the entries (lines) of its body and
//! performs no I/O; the generator adds headings and joins them.

use std::collections::HashSet;

use blueprint_core::config::GenerationConfig;
use blueprint_core::models::{EnforcementLevel, ValidationStrictness};
use blueprint_core::scores::mean;

use super::DocumentInput;

/// Always present in the anti-pattern list.
const BASE_ANTI_PATTERNS: &[&str] = &[
    "Creating new patterns when an existing one fits",
    "Skipping validation because the change \"should work\"",
    "Ignoring failing tests instead of fixing the cause",
    "Hardcoding values that belong in configuration",
    "Catching all errors and discarding them",
];

fn pct(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn none_matched(what: &str) -> Vec<String> {
    vec![format!("_No {what} matched this request._")]
}

/// Distinct values in first-seen order, each with the id it came from.
fn distinct<'a>(values: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<(&'a str, &'a str)> {
    let mut seen = HashSet::new();
    values.filter(|(v, _)| seen.insert(*v)).collect()
}

pub fn goal(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    vec![
        input.feature_request.trim().to_string(),
        String::new(),
        format!(
            "Template: {} (`{}`), complexity preference: {}.",
            input.template.name, input.template.id, input.context.metadata.complexity_filter
        ),
    ]
}

pub fn why(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let patterns = &input.context.selected_patterns;
    if patterns.is_empty() {
        return vec![
            "- No recorded pattern covers this feature yet; validate the approach early."
                .to_string(),
        ];
    }

    let avg = mean(patterns.iter().map(|p| p.pattern().metrics.rate()));
    let uses: u64 = patterns.iter().map(|p| p.pattern().metrics.usage_count).sum();
    let mut entries = vec![format!(
        "- Builds on {} proven pattern(s), average success rate {} across {} recorded uses.",
        patterns.len(),
        pct(avg),
        uses
    )];
    entries.extend(patterns.iter().map(|p| {
        let pattern = p.pattern();
        format!(
            "- **{}**: {} success over {} uses.",
            pattern.title,
            pct(pattern.metrics.rate()),
            pattern.metrics.usage_count
        )
    }));
    entries
}

pub fn success_criteria(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let mut entries = vec![
        "- [ ] The behavior described under Goal works end to end".to_string(),
        "- [ ] Every level of the validation loop passes".to_string(),
    ];
    if input.context.mandatory_rule_count() > 0 {
        entries.push("- [ ] All mandatory project rules are satisfied".to_string());
    }
    if !input.context.selected_patterns.is_empty() {
        entries.push(
            "- [ ] The implementation follows at least one referenced pattern".to_string(),
        );
    }
    entries
}

pub fn context_references(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let research = &input.context.relevant_research;
    let sources = distinct(input.context.selected_patterns.iter().flat_map(|p| {
        p.pattern()
            .source_references
            .iter()
            .map(move |r| (r.as_str(), p.pattern().id.as_str()))
    }));

    if research.is_empty() && sources.is_empty() {
        return none_matched("research notes or source references");
    }

    let mut entries = Vec::new();
    for note in research {
        let item = &note.item;
        entries.push(format!("### {} (freshness {})", item.title, pct(item.freshness())));
        entries.extend(item.key_insights.iter().map(|insight| format!("- {insight}")));
        entries.extend(item.documentation_refs.iter().map(|doc| format!("- Docs: {doc}")));
        entries.push(String::new());
    }

    if !sources.is_empty() {
        entries.push("### Source references".to_string());
        entries.extend(
            sources
                .into_iter()
                .map(|(reference, pattern_id)| format!("- `{reference}` (from {pattern_id})")),
        );
    }
    entries
}

pub fn known_gotchas(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let gotchas = distinct(input.context.selected_patterns.iter().flat_map(|p| {
        p.pattern()
            .gotchas
            .iter()
            .map(move |g| (g.as_str(), p.pattern().id.as_str()))
    }));
    if gotchas.is_empty() {
        return none_matched("recorded gotchas");
    }
    gotchas
        .into_iter()
        .map(|(gotcha, pattern_id)| format!("- {gotcha} (pattern `{pattern_id}`)"))
        .collect()
}

pub fn implementation_blueprint(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let patterns = &input.context.selected_patterns;
    if patterns.is_empty() {
        return [
            "1. Study the surrounding code and pick the closest existing structure",
            "2. Write a failing test that captures the requested behavior",
            "3. Implement the smallest change that makes it pass",
            "4. Refactor and run the validation loop",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
    }

    let mut entries = Vec::new();
    for (i, p) in patterns.iter().enumerate() {
        let pattern = p.pattern();
        entries.push(format!("### {}. {} (`{}`)", i + 1, pattern.title, pattern.id));
        if !pattern.description.is_empty() {
            entries.push(pattern.description.clone());
        }
        if pattern.implementation_steps.is_empty() {
            entries.push("- No recorded steps; follow the referenced sources.".to_string());
        }
        entries.extend(
            pattern
                .implementation_steps
                .iter()
                .enumerate()
                .map(|(n, step)| format!("{}. {step}", n + 1)),
        );
        entries.push(String::new());
    }
    entries
}

pub fn project_rules(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let rules = &input.context.prioritized_rules;
    if rules.is_empty() {
        return none_matched("project rules");
    }

    let mut entries = Vec::new();
    for level in EnforcementLevel::ALL {
        let mut group = rules.iter().filter(|r| r.item.enforcement == level).peekable();
        if group.peek().is_none() {
            continue;
        }
        entries.push(format!("### {}", level.heading()));
        for rule in group {
            entries.push(format!("- **{}**: {}", rule.item.title, rule.item.description));
            entries.extend(
                rule.item
                    .examples
                    .iter()
                    .map(|example| format!("  - Example: `{example}`")),
            );
        }
        entries.push(String::new());
    }
    entries
}

pub fn validation_loop(_: &DocumentInput<'_>, config: &GenerationConfig) -> Vec<String> {
    let levels = [
        ("Level 1: Syntax & Style", &config.syntax_command),
        ("Level 2: Unit Tests", &config.unit_test_command),
        ("Level 3: Integration Test", &config.integration_command),
    ];
    let mut entries = Vec::new();
    for (title, command) in levels {
        entries.push(format!("### {title}"));
        entries.push("```bash".to_string());
        entries.push(command.clone());
        entries.push("```".to_string());
    }
    entries.push("Fix every failure before moving to the next level.".to_string());
    entries
}

pub fn final_checklist(input: &DocumentInput<'_>, config: &GenerationConfig) -> Vec<String> {
    let success_line = |threshold: f64| {
        format!(
            "- [ ] Chosen approach follows a pattern with success rate >= {}",
            pct(threshold)
        )
    };

    let mut entries = vec![
        "- [ ] All validation levels pass".to_string(),
        "- [ ] No mandatory project rule is violated".to_string(),
    ];
    match input.strictness {
        ValidationStrictness::Basic => {}
        ValidationStrictness::Standard => {
            entries.push(success_line(config.standard_success_threshold));
        }
        ValidationStrictness::Strict => {
            entries.push(success_line(config.standard_success_threshold));
            entries.push(success_line(config.strict_success_threshold));
            entries.push("- [ ] Every known gotcha listed above is mitigated".to_string());
        }
    }
    entries.push("- [ ] Error cases are handled and logged".to_string());
    entries
}

pub fn anti_patterns(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let pitfalls = distinct(input.context.relevant_research.iter().flat_map(|r| {
        r.item
            .common_pitfalls
            .iter()
            .map(move |p| (p.as_str(), r.item.id.as_str()))
    }));
    BASE_ANTI_PATTERNS
        .iter()
        .map(|item| format!("- {item}"))
        .chain(
            pitfalls
                .into_iter()
                .map(|(pitfall, research_id)| format!("- {pitfall} (research `{research_id}`)")),
        )
        .collect()
}

pub fn provenance(input: &DocumentInput<'_>, _: &GenerationConfig) -> Vec<String> {
    let ctx = input.context;
    vec![
        format!("- template: {}", input.template.id),
        format!(
            "- patterns: {}",
            id_list(ctx.selected_patterns.iter().map(|p| p.pattern().id.as_str()))
        ),
        format!(
            "- rules: {}",
            id_list(ctx.prioritized_rules.iter().map(|r| r.item.id.as_str()))
        ),
        format!(
            "- research: {}",
            id_list(ctx.relevant_research.iter().map(|r| r.item.id.as_str()))
        ),
    ]
}

fn id_list<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let ids: Vec<&str> = ids.collect();
    if ids.is_empty() {
        "none".to_string()
    } else {
        ids.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use blueprint_core::models::{AssembledContext, Template};

    use super::*;
    use crate::document::SectionFn;

    fn render(section: SectionFn, strictness: ValidationStrictness) -> Vec<String> {
        let template = Template::builtin_default();
        let context = AssembledContext::default();
        let input = DocumentInput {
            feature_request: "Add login",
            template: &template,
            context: &context,
            strictness,
        };
        section(&input, &GenerationConfig::default())
    }

    #[test]
    fn checklist_success_line_depends_on_strictness() {
        let basic = render(final_checklist, ValidationStrictness::Basic).join("\n");
        let standard = render(final_checklist, ValidationStrictness::Standard).join("\n");
        let strict = render(final_checklist, ValidationStrictness::Strict).join("\n");

        assert!(!basic.contains("success rate"));
        assert!(standard.contains(">= 70%"));
        assert!(!standard.contains(">= 90%"));
        assert!(!standard.contains("gotcha"));
        assert!(strict.contains(">= 70%"));
        assert!(strict.contains(">= 90%"));
        assert!(strict.contains("gotcha listed above is mitigated"));
    }

    #[test]
    fn validation_loop_uses_configured_commands() {
        let entries = render(validation_loop, ValidationStrictness::Standard);
        assert!(entries.contains(&"<syntax-and-style command>".to_string()));
        assert!(entries.contains(&"<unit test command>".to_string()));
        assert!(entries.contains(&"<integration test command>".to_string()));
        assert_eq!(entries.iter().filter(|e| e.starts_with("### Level")).count(), 3);
    }

    #[test]
    fn empty_context_sections_say_so() {
        let rules = render(project_rules, ValidationStrictness::Standard);
        assert!(rules[0].contains("No project rules"));
        let gotchas = render(known_gotchas, ValidationStrictness::Standard);
        assert!(gotchas[0].contains("No recorded gotchas"));
        let footer = render(provenance, ValidationStrictness::Standard);
        assert!(footer.contains(&"- patterns: none".to_string()));
    }

    #[test]
    fn anti_patterns_always_include_base_list() {
        let entries = render(anti_patterns, ValidationStrictness::Basic);
        assert_eq!(entries.len(), BASE_ANTI_PATTERNS.len());
    }
}
