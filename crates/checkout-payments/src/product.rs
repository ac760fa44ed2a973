//! Product naming shown on the hosted checkout page.

/// Plan purchased when the caller does not name one
pub const DEFAULT_PLAN: &str = "magician";

/// Display name of the line item for `plan`, e.g. `"magician"` -> `"Magician Plan"`.
pub fn product_display_name(plan: &str) -> String {
    format!("{} Plan", capitalize(plan))
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
