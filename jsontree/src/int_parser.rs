// SPDX-License-Identifier: Apache-2.0

// Int parser module, atoi-style: reads an optional sign and the leading digit
// run, stops at the first non-digit and wraps on overflow.

/// Integer type selected by the `int8` / `int32` / `int64` feature.
#[cfg(feature = "int8")]
pub type Int = i8;
/// Integer type selected by the `int8` / `int32` / `int64` feature.
#[cfg(feature = "int32")]
pub type Int = i32;
/// Integer type selected by the `int8` / `int32` / `int64` feature.
#[cfg(feature = "int64")]
pub type Int = i64;

/// Creates a panic-free, const-stable, wrapping base-10 parser for a signed integer type.
macro_rules! define_wrapping_parser {
    ($fn_name:ident, $int_ty:ty) => {
        /// Parses the leading integer of a byte slice into a(n) `
        #[doc = stringify!($int_ty)]
        /// `.
        ///
        /// Parsing stops at the first byte that is not a digit, so `b"3.5"`
        /// gives 3 and `b"-"` gives 0. Values outside the type's range wrap
        /// around in two's complement. This function never panics.
        #[allow(dead_code)]
        pub const fn $fn_name(src: &[u8]) -> $int_ty {
            let (is_negative, mut digits) = match src {
                [b'+', rest @ ..] => (false, rest),
                [b'-', rest @ ..] => (true, rest),
                _ => (false, src),
            };

            let mut result: $int_ty = 0;

            while let Some((&byte, rest)) = digits.split_first() {
                let digit = match byte {
                    b'0'..=b'9' => (byte - b'0') as $int_ty,
                    _ => break,
                };

                // Building the number negatively from the start keeps iT::MIN exact.
                result = result.wrapping_mul(10);
                result = if is_negative {
                    result.wrapping_sub(digit)
                } else {
                    result.wrapping_add(digit)
                };

                digits = rest;
            }

            result
        }
    };
}

define_wrapping_parser!(wrapping_i8, i8);
define_wrapping_parser!(wrapping_i32, i32);
define_wrapping_parser!(wrapping_i64, i64);

/// Converts a number literal to the configured [`Int`] width.
pub(crate) const fn parse_int(src: &[u8]) -> Int {
    #[cfg(feature = "int8")]
    let result = wrapping_i8(src);
    #[cfg(feature = "int32")]
    let result = wrapping_i32(src);
    #[cfg(feature = "int64")]
    let result = wrapping_i64(src);

    result
}
