use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::symbols;

/// The ordered substitution rules. Structural rewrites run before the
/// command table so `\frac{\alpha}{2}` keeps its shape and `\alpha` is still
/// seen as a command afterwards.
struct Rules {
    frac: Regex,
    indexed_root: Regex,
    root: Regex,
    sup_digit: Regex,
    sub_digit: Regex,
    sup_group: Regex,
    sub_group: Regex,
    command: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        let re = |pattern: &str| Regex::new(pattern).expect("Invalid transcoder regex");
        Rules {
            frac: re(r"\\frac\{([^{}]*)\}\{([^{}]*)\}"),
            indexed_root: re(r"\\sqrt\[([^\[\]{}]*)\]\{([^{}]*)\}"),
            root: re(r"\\sqrt\{([^{}]*)\}"),
            sup_digit: re(r"\^([0-9])"),
            sub_digit: re(r"_([0-9])"),
            sup_group: re(r"\^\{([^{}]*)\}"),
            sub_group: re(r"_\{([^{}]*)\}"),
            command: re(r"\\([A-Za-z]+|(?s:.))"),
        }
    })
}

/// Converts LaTeX-style math into a Unicode approximation.
///
/// One ordered pass: fractions, roots, single-digit scripts, braced scripts,
/// then backslash commands. Any backslash token missing from the table loses
/// its backslash and keeps its name or character (`\%` becomes `%`);
/// surrounding braces stay as written. This never fails.
pub fn transcode(latex: &str) -> String {
    let r = rules();

    let s = r.frac.replace_all(latex, "($1)/($2)");
    let s = r.indexed_root.replace_all(&s, |caps: &Captures| {
        let index = &caps[1];
        let mut chars = index.chars();
        let prefix = match (chars.next().and_then(symbols::superscript_digit), chars.next()) {
            (Some(glyph), None) => glyph.to_string(),
            _ => index.to_string(),
        };
        format!("{prefix}√({})", &caps[2])
    });
    let s = r.root.replace_all(&s, "√($1)");
    let s = r.sup_digit.replace_all(&s, |caps: &Captures| {
        digit_glyph(&caps[0], &caps[1], symbols::superscript_digit)
    });
    let s = r.sub_digit.replace_all(&s, |caps: &Captures| {
        digit_glyph(&caps[0], &caps[1], symbols::subscript_digit)
    });
    let s = r.sup_group.replace_all(&s, "^($1)");
    let s = r.sub_group.replace_all(&s, "_($1)");
    let s = r.command.replace_all(&s, |caps: &Captures| {
        let name = &caps[1];
        match symbols::command(name) {
            Some(glyph) => glyph.to_string(),
            None => {
                log::debug!("unknown math command `\\{name}`; dropping the backslash");
                name.to_string()
            }
        }
    });

    s.trim().to_string()
}

fn digit_glyph(whole: &str, digit: &str, map: fn(char) -> Option<char>) -> String {
    digit
        .chars()
        .next()
        .and_then(map)
        .map_or_else(|| whole.to_string(), |glyph| glyph.to_string())
}
