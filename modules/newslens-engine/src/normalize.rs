/// Collapse every whitespace run to a single space and strip the ends.
/// Total and idempotent: any input maps to canonical form, and canonical
/// form maps to itself.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
