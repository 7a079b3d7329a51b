// SPDX-License-Identifier: Apache-2.0

//! Indented debug dump of a parsed tree.
//!
//! One line per node, two spaces per nesting level. Strings are written
//! between quotes without re-escaping, so the output is meant for reading,
//! not for feeding back into the parser.

use core::fmt::{self, Write};

use alloc::format;

use crate::node::{Node, Value};

/// `Display` adapter returned by [`Node::dump`].
pub struct Dump<'a> {
    node: &'a Node,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.node, 0)
    }
}

impl Node {
    /// Debug dump of this node and everything below it.
    ///
    /// # Example
    /// ```
    /// let root = jsontree::parse(r#"{"id": 7, "tags": ["a"]}"#)?;
    /// assert_eq!(
    ///     root.dump().to_string(),
    ///     "{\n  \"id\": 7\n  \"tags\": [\n    \"a\"\n  ]\n}\n"
    /// );
    /// # Ok::<(), jsontree::ParseError>(())
    /// ```
    pub fn dump(&self) -> Dump<'_> {
        Dump { node: self }
    }

    /// Writes [`dump`](Self::dump) to standard output.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::print!("{}", self.dump());
    }
}

fn write_indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn write_node(out: &mut impl Write, node: &Node, depth: usize) -> fmt::Result {
    write_indent(out, depth)?;
    if let Some(key) = node.key() {
        write!(out, "\"{key}\": ")?;
    }

    match node.value() {
        Value::Null => writeln!(out, "null"),
        Value::Bool(value) => writeln!(out, "{value}"),
        Value::Number(number) => writeln!(out, "{}", General(number.as_f64())),
        Value::String(text) => writeln!(out, "\"{text}\""),
        Value::Array(elements) => write_block(out, elements, depth, '[', ']'),
        Value::Object(members) => write_block(out, members, depth, '{', '}'),
    }
}

fn write_block(
    out: &mut impl Write,
    children: &[Node],
    depth: usize,
    open: char,
    close: char,
) -> fmt::Result {
    writeln!(out, "{open}")?;
    for child in children {
        write_node(out, child, depth + 1)?;
    }
    write_indent(out, depth)?;
    writeln!(out, "{close}")
}

/// Significant digits of the `%g` style number format.
const PRECISION: i32 = 6;

/// Formats a double like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation when the exponent is below -4 or at least 6.
struct General(f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent after rounding to PRECISION digits picks the style.
        let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if exponent < -4 || exponent >= PRECISION {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION - 1 - exponent) as usize;
            let fixed = format!("{value:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
