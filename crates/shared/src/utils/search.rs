const DISPLAY_ID_SUFFIX_MAX: usize = 4;

/// Classifies an order search term: a short all-digit term is treated as a
/// suffix of the human-facing order number ("07" matches #1007), anything
/// else is resolved against user fields.
pub fn display_id_suffix(term: &str) -> Option<&str> {
    let term = term.trim();
    if !term.is_empty()
        && term.len() <= DISPLAY_ID_SUFFIX_MAX
        && term.bytes().all(|b| b.is_ascii_digit())
    {
        Some(term)
    } else {
        None
    }
}

/// Escapes LIKE/ILIKE wildcards so a search term is matched literally as a
/// substring.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
