use std::fmt::Write as _;

/// Render PEM text as one C declaration built from adjacent string
/// literals, one literal per input line, each ending in an escaped
/// newline. Embedded quotes and backslashes are escaped so a hostile
/// input file cannot break out of the generated literal.
pub fn render_string_literal(name: &str, pem: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "static const char {}[] = ", name);

    for line in pem.lines() {
        let _ = writeln!(out, "    \"{}\\n\"", escape_c(line));
    }

    out.push_str("    ;\n\n");
    out
}

fn escape_c(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_literal_per_input_line() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";
        let rendered = render_string_literal("aws_iot_ca_cert", pem);

        let literals: Vec<&str> = rendered
            .lines()
            .filter(|l| l.trim_start().starts_with('"'))
            .collect();
        assert_eq!(literals.len(), 3);
        for literal in literals {
            assert!(literal.ends_with("\\n\""));
        }
    }

    #[test]
    fn declaration_shape() {
        let rendered = render_string_literal("aws_iot_private_key", "k\n");
        assert_eq!(
            rendered,
            "static const char aws_iot_private_key[] = \n    \"k\\n\"\n    ;\n\n"
        );
    }

    #[test]
    fn blank_line_renders_as_bare_newline_literal() {
        let rendered = render_string_literal("x", "a\n\n");
        assert!(rendered.contains("    \"a\\n\"\n    \"\\n\"\n"));
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let rendered = render_string_literal("x", "a\"b\\c\n");
        assert!(rendered.contains("    \"a\\\"b\\\\c\\n\"\n"));
    }
}
