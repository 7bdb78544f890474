//! # IR Optimizer
//!
//! Normalises blank lines so section emitters can be sloppy about spacing:
//!
//! 1. **Collapse runs**: consecutive `Blank` ops become one
//! 2. **Trim blocks**: no `Blank` directly after `Open` or before `Close`
//! 3. **Trim edges**: no leading or trailing `Blank`
//!
//! Content ops are never reordered or removed.

use super::ops::{Op, Program};

impl Program {
    /// Apply all normalisation passes and return the result.
    pub fn optimize(self) -> Self {
        let mut out: Vec<Op> = Vec::with_capacity(self.ops.len());

        for op in self.ops {
            match op {
                Op::Blank => {
                    // Skip at start, after another blank, or right after an Open
                    if matches!(out.last(), None | Some(Op::Blank) | Some(Op::Open(_))) {
                        continue;
                    }
                    out.push(Op::Blank);
                }
                Op::Close => {
                    while matches!(out.last(), Some(Op::Blank)) {
                        out.pop();
                    }
                    out.push(Op::Close);
                }
                other => out.push(other),
            }
        }

        while matches!(out.last(), Some(Op::Blank)) {
            out.pop();
        }

        Program { ops: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_blank_runs() {
        let program = Program {
            ops: vec![
                Op::Line("a;".into()),
                Op::Blank,
                Op::Blank,
                Op::Blank,
                Op::Line("b;".into()),
            ],
        };
        let optimized = program.optimize();
        assert_eq!(
            optimized.ops,
            vec![Op::Line("a;".into()), Op::Blank, Op::Line("b;".into())]
        );
    }

    #[test]
    fn test_trim_inside_blocks() {
        let program = Program {
            ops: vec![
                Op::Open("contract A".into()),
                Op::Blank,
                Op::Line("uint256 x;".into()),
                Op::Blank,
                Op::Close,
            ],
        };
        let optimized = program.optimize();
        assert_eq!(
            optimized.ops,
            vec![
                Op::Open("contract A".into()),
                Op::Line("uint256 x;".into()),
                Op::Close,
            ]
        );
    }

    #[test]
    fn test_trim_edges() {
        let program = Program {
            ops: vec![Op::Blank, Op::Comment("x".into()), Op::Blank],
        };
        assert_eq!(program.optimize().ops, vec![Op::Comment("x".into())]);
    }

    #[test]
    fn test_content_untouched() {
        let ops = vec![
            Op::Comment("c".into()),
            Op::Open("f()".into()),
            Op::Verbatim("x = 1;".into()),
            Op::Close,
        ];
        let program = Program { ops: ops.clone() };
        assert_eq!(program.optimize().ops, ops);
    }
}
