//! # Code Generation
//!
//! Renders IR programs to Solidity source text.

use super::ops::{Op, Program};

/// Indent unit for nested blocks.
const INDENT: &str = "    ";

impl Program {
    /// Render the program as Solidity source.
    ///
    /// Output always ends with a single newline. Unbalanced `Close` ops
    /// saturate at depth zero rather than panicking.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;

        for op in &self.ops {
            match op {
                Op::Comment(text) => {
                    push_line(&mut out, depth, &format!("// {}", text));
                }
                Op::Line(text) => {
                    push_line(&mut out, depth, text);
                }
                Op::Verbatim(text) => {
                    for line in dedent(text) {
                        if line.is_empty() {
                            out.push('\n');
                        } else {
                            push_line(&mut out, depth, &line);
                        }
                    }
                }
                Op::Blank => {
                    out.push('\n');
                }
                Op::Open(header) => {
                    push_line(&mut out, depth, &format!("{} {{", header));
                    depth += 1;
                }
                Op::Close => {
                    depth = depth.saturating_sub(1);
                    push_line(&mut out, depth, "}");
                }
            }
        }

        out
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

/// Strip the common leading whitespace of all non-blank lines.
///
/// Leading and trailing blank lines are dropped; trailing whitespace on
/// each line is trimmed.
fn dedent(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map(|i| i + 1)
        .unwrap_or(start);
    let body = &lines[start..end];

    let margin = body
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| l.get(margin..).unwrap_or_else(|| l.trim_start()).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_indentation() {
        let program = Program {
            ops: vec![
                Op::Open("contract A".into()),
                Op::Comment("State variables".into()),
                Op::Line("uint256 x;".into()),
                Op::Open("function f() public".into()),
                Op::Line("x = 1;".into()),
                Op::Close,
                Op::Close,
            ],
        };
        assert_eq!(
            program.to_source(),
            "contract A {\n    // State variables\n    uint256 x;\n    function f() public {\n        x = 1;\n    }\n}\n"
        );
    }

    #[test]
    fn test_verbatim_reindents() {
        let program = Program {
            ops: vec![
                Op::Open("function f() public".into()),
                Op::Verbatim("\n      if (a) {\n          b();\n      }\n".into()),
                Op::Close,
            ],
        };
        assert_eq!(
            program.to_source(),
            "function f() public {\n    if (a) {\n        b();\n    }\n}\n"
        );
    }

    #[test]
    fn test_verbatim_keeps_inner_blank_lines() {
        assert_eq!(dedent("a;\n\n  b;"), vec!["a;", "", "  b;"]);
    }

    #[test]
    fn test_unbalanced_close_saturates() {
        let program = Program { ops: vec![Op::Close, Op::Line("x".into())] };
        assert_eq!(program.to_source(), "}\nx\n");
    }
}
