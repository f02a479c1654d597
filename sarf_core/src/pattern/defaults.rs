use super::Pattern;

/// The built-in pattern set: participles, forms II and VIII, the intensive
/// and a broken plural.
#[must_use]
pub fn default_patterns() -> Vec<Pattern> {
    [
        ("فاعل", "VCCCVC", "Active participle (the agent)"),
        ("مفعول", "CVCCVC", "Passive participle (the patient)"),
        ("افتعل", "VCVCCVC", "Form VIII (reflexive)"),
        ("تفعيل", "VCVCCVC", "Form II verbal noun (causative)"),
        ("مفعال", "CVCCVC", "Intensive form"),
        ("فعال", "CVCVC", "Plural or adjective"),
    ]
    .into_iter()
    .filter_map(|(name, structure, description)| Pattern::new(name, structure, description).ok())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_defaults_parse() {
        let patterns = default_patterns();
        assert_eq!(patterns.len(), 6);
        assert!(patterns.iter().any(|p| p.name() == "مفعول"));
    }
}
