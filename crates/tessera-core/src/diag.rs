//! Printf-style template substitution for diagnostic strings.
//!
//! Error messages and trace lines in this workspace are rendered through
//! [`diag_format`], a tiny formatter with `%`-prefixed specifiers. It is
//! diagnostics-only: nothing on a data path depends on its output, so odd
//! formatting of an odd input is acceptable where it would not be in the
//! wire format itself.
//!
//! Arguments are passed as [`DiagArg`] values; each specifier coerces the
//! next argument to the type it needs rather than failing, in keeping with
//! the formatter's best-effort role.

use std::fmt::Write as _;

/// A typed argument for [`diag_format`].
///
/// One variant per shape of value the specifiers consume. Coercion between
/// shapes (e.g. `%d` applied to a `Float`) truncates or falls back rather
/// than erroring.
#[derive(Clone, Debug)]
pub enum DiagArg<'a> {
    /// A signed integer, consumed by the numeric specifiers.
    Int(i64),
    /// A floating point value, consumed by `%f`.
    Float(f64),
    /// A borrowed string, consumed by `%s` and `%c`.
    Str(&'a str),
    /// A single character.
    Char(char),
    /// A structured value, serialized by `%j`.
    Json(serde_json::Value),
}

impl DiagArg<'_> {
    fn as_int(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
            Self::Float(v) => *v as i64,
            Self::Char(c) => i64::from(u32::from(*c)),
            Self::Str(s) => s.trim().parse().unwrap_or(0),
            Self::Json(_) => 0,
        }
    }

    fn as_float(&self) -> f64 {
        match self {
            Self::Int(v) => *v as f64,
            Self::Float(v) => *v,
            Self::Char(c) => f64::from(u32::from(*c)),
            Self::Str(s) => s.trim().parse().unwrap_or(0.0),
            Self::Json(_) => 0.0,
        }
    }

    fn as_json(&self) -> serde_json::Value {
        match self {
            Self::Int(v) => serde_json::Value::from(*v),
            Self::Float(v) => serde_json::Value::from(*v),
            Self::Str(s) => serde_json::Value::from(*s),
            Self::Char(c) => serde_json::Value::from(c.to_string()),
            Self::Json(v) => v.clone(),
        }
    }

    fn write_display(&self, out: &mut String) {
        match self {
            Self::Int(v) => {
                let _ = write!(out, "{v}");
            }
            Self::Float(v) => {
                let _ = write!(out, "{v}");
            }
            Self::Str(s) => out.push_str(s),
            Self::Char(c) => out.push(*c),
            Self::Json(v) => {
                let _ = write!(out, "{v}");
            }
        }
    }
}

/// Render `template`, substituting `%`-prefixed specifiers from `args` in
/// order.
///
/// Specifiers: `%d` decimal, `%x`/`%X` hexadecimal with `0x` prefix,
/// `%a` hexadecimal zero-padded to 8 digits, `%b` binary, `%o` octal with a
/// leading `0`, `%c` character, `%f` floating point (optional precision,
/// default 6; a `.` flag strips the leading zero), `%s` string, `%j` JSON.
/// An unrecognized specifier is emitted literally; a specifier with no
/// remaining argument substitutes `?`.
pub fn diag_format(template: &str, args: &[DiagArg<'_>]) -> String {
    let chars: Vec<char> = template.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(template.len());
    let mut arg_index = 0;
    let mut i = 0;

    let mut next_arg = |out: &mut String| {
        let arg = args.get(arg_index).cloned();
        arg_index += 1;
        if arg.is_none() {
            out.push('?');
        }
        arg
    };

    while i < n {
        if chars[i] != '%' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        i += 1;
        if i >= n {
            break;
        }

        // Flags: `.` drops the leading zero in %f output; `0.` keeps it
        // explicitly; the default also keeps it.
        let mut leading_zero = true;
        if chars[i] == '.' {
            leading_zero = false;
            i += 1;
        } else if chars[i] == '0' && chars.get(i + 1) == Some(&'.') {
            i += 2;
        }

        let mut precision: Option<usize> = None;
        while i < n && chars[i].is_ascii_digit() {
            let digit = (chars[i] as usize) - ('0' as usize);
            precision = Some(precision.unwrap_or(0) * 10 + digit);
            i += 1;
        }

        let Some(&spec) = chars.get(i) else { break };
        i += 1;

        match spec {
            'a' => {
                if let Some(arg) = next_arg(&mut out) {
                    out.push_str("0x");
                    out.push_str(&pad(&to_radix(arg.as_int(), 16), 8));
                }
            }
            'b' => {
                if let Some(arg) = next_arg(&mut out) {
                    out.push_str(&to_radix(arg.as_int(), 2));
                }
            }
            'c' => {
                if let Some(arg) = next_arg(&mut out) {
                    match arg {
                        DiagArg::Str(s) => out.push_str(s),
                        DiagArg::Char(c) => out.push(c),
                        other => {
                            let code = u32::try_from(other.as_int()).ok();
                            out.push(code.and_then(char::from_u32).unwrap_or('?'));
                        }
                    }
                }
            }
            'd' => {
                if let Some(arg) = next_arg(&mut out) {
                    let _ = write!(out, "{}", arg.as_int());
                }
            }
            'f' => {
                if let Some(arg) = next_arg(&mut out) {
                    // Precision 0 falls back to the default of 6.
                    let prec = match precision {
                        Some(p) if p > 0 => p,
                        _ => 6,
                    };
                    let rendered = format!("{:.prec$}", arg.as_float());
                    if leading_zero {
                        out.push_str(&rendered);
                    } else {
                        out.push_str(rendered.strip_prefix('0').unwrap_or(&rendered));
                    }
                }
            }
            'j' => {
                if let Some(arg) = next_arg(&mut out) {
                    let _ = write!(out, "{}", arg.as_json());
                }
            }
            'o' => {
                if let Some(arg) = next_arg(&mut out) {
                    out.push('0');
                    out.push_str(&to_radix(arg.as_int(), 8));
                }
            }
            's' => {
                if let Some(arg) = next_arg(&mut out) {
                    arg.write_display(&mut out);
                }
            }
            'x' => {
                if let Some(arg) = next_arg(&mut out) {
                    out.push_str("0x");
                    out.push_str(&to_radix(arg.as_int(), 16));
                }
            }
            'X' => {
                if let Some(arg) = next_arg(&mut out) {
                    out.push_str("0x");
                    out.push_str(&to_radix(arg.as_int(), 16).to_uppercase());
                }
            }
            other => out.push(other),
        }
    }

    out
}

/// Left-pad `v` with zeros to at least `width` characters.
fn pad(v: &str, width: usize) -> String {
    if v.len() >= width {
        return v.to_owned();
    }
    let mut out = String::with_capacity(width);
    for _ in 0..width - v.len() {
        out.push('0');
    }
    out.push_str(v);
    out
}

/// Render an integer in the given radix, sign first, lowercase digits.
fn to_radix(value: i64, radix: u32) -> String {
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while magnitude > 0 {
        let d = (magnitude % u64::from(radix)) as u32;
        digits.push(char::from_digit(d, radix).unwrap_or('0'));
        magnitude /= u64::from(radix);
    }
    let mut out = String::with_capacity(digits.len() + 1);
    if value < 0 {
        out.push('-');
    }
    out.extend(digits.iter().rev());
    out
}
