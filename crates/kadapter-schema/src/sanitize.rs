/// Map an arbitrary string onto `[a-z0-9-]`, safe for use as a resource name.
///
/// Letters are lowercased. Every run of characters that are not ASCII letters
/// or digits (punctuation, whitespace, existing hyphens, non-ASCII) becomes a
/// single hyphen. Hyphens at either end are dropped, so the result always
/// starts and ends with an alphanumeric character or is empty.
///
/// The transform is idempotent: `sanitize(&sanitize(s)) == sanitize(s)`.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}
