/// Rewrite characters that collapse or break when placed in raw markup:
/// spaces would be merged by the layout engine, and `&`, `<`, `>` would be
/// parsed as markup. Everything else passes through unchanged.
pub fn escape_into(out: &mut String, c: char) {
    match c {
        ' ' => out.push_str("&nbsp"),
        '&' => out.push_str("&amp"),
        '<' => out.push_str("&lt"),
        '>' => out.push_str("&gt"),
        _ => out.push(c),
    }
}

/// Allocating form of [`escape_into`]
pub fn escape(c: char) -> String {
    let mut out = String::new();
    escape_into(&mut out, c);
    out
}
