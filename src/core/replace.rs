use crate::domain::model::{ExtractionResult, ReplacementRule};

/// Literal global substitution: every non-overlapping occurrence of `find` is
/// replaced left to right. `find` is plain text, never a pattern, so user
/// input containing regex metacharacters cannot change the matching behavior.
pub fn replace_literal(value: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find(find) {
        out.push_str(&rest[..pos]);
        out.push_str(replace);
        rest = &rest[pos + find.len()..];
    }
    out.push_str(rest);
    out
}

/// Run every active rule, in order, over one field value. Rule i's output is
/// rule i+1's input, so text introduced by an earlier replacement is subject
/// to later rules in the same pass.
fn apply_to_value(value: &str, rules: &[ReplacementRule]) -> String {
    rules
        .iter()
        .filter(|rule| rule.is_active())
        .fold(value.to_string(), |acc, rule| {
            replace_literal(&acc, &rule.find, &rule.replace)
        })
}

/// Apply the rule list across every text field of every record, producing a
/// new record list with order preserved. Absent fields stay absent, no field
/// is added or removed, and the envelope (`job_id`, `status`, `total_voters`)
/// carries over unchanged.
pub fn apply_rules(result: &ExtractionResult, rules: &[ReplacementRule]) -> ExtractionResult {
    let data = result
        .data
        .iter()
        .map(|voter| {
            let mut updated = voter.clone();
            for field in updated.text_fields_mut() {
                if let Some(value) = field.as_deref() {
                    *field = Some(apply_to_value(value, rules));
                }
            }
            updated
        })
        .collect();

    ExtractionResult {
        job_id: result.job_id.clone(),
        status: result.status.clone(),
        total_voters: result.total_voters,
        data,
    }
}
