use super::{Formatter, Params, ToCql};

#[derive(Clone, Copy)]
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToCql for Ident<S> {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = self.0.as_ref();

        if needs_quoting(name) {
            f.dst.push('"');
            for c in name.chars() {
                if c == '"' {
                    f.dst.push('"');
                }
                f.dst.push(c);
            }
            f.dst.push('"');
        } else {
            f.dst.push_str(name);
        }
    }
}

/// Unquoted CQL identifiers are lowercase alphanumerics; anything else must
/// be double-quoted to preserve its spelling.
fn needs_quoting(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return true,
    }
    chars.any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
}
