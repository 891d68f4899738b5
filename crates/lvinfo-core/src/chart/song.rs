use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::chart::{Slot, Variant};
use crate::config::SLOT_COUNT;

/// One song as read from the levels document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSongRecord")]
pub struct SongRecord {
    pub name: String,
    pub variant: Variant,
    /// Raw ratings in slot order. Zero or NaN means the slot is empty.
    pub levels: [f64; SLOT_COUNT],
}

impl SongRecord {
    pub fn new(name: impl Into<String>, variant: Variant, levels: [f64; SLOT_COUNT]) -> Self {
        Self {
            name: name.into(),
            variant,
            levels,
        }
    }

    pub fn rating(&self, slot: Slot) -> f64 {
        self.levels[slot.index()]
    }
}

/// On-disk shape: `{ "n": name, "dx": flag, "lv": [ratings] }`.
#[derive(Deserialize)]
struct RawSongRecord {
    n: String,
    #[serde(default)]
    dx: Value,
    #[serde(default)]
    lv: Vec<Value>,
}

impl From<RawSongRecord> for SongRecord {
    fn from(raw: RawSongRecord) -> Self {
        if raw.lv.len() < SLOT_COUNT {
            warn!(
                "Song {:?} has {} rating entries (expected {}), missing slots are left empty",
                raw.n,
                raw.lv.len(),
                SLOT_COUNT
            );
        } else if raw.lv.len() > SLOT_COUNT {
            warn!(
                "Song {:?} has {} rating entries (expected {}), extra entries are ignored",
                raw.n,
                raw.lv.len(),
                SLOT_COUNT
            );
        }

        let mut levels = [0.0; SLOT_COUNT];
        for (level, value) in levels.iter_mut().zip(&raw.lv) {
            *level = rating_from_value(value);
        }

        Self {
            variant: Variant::from_flag(&raw.dx),
            name: raw.n,
            levels,
        }
    }
}

/// Coerce one `lv` entry to a rating using JavaScript `Number()` rules.
///
/// Null and `false` are 0, `true` is 1, strings follow [`number_from_str`],
/// arrays go through their comma-joined text and objects are NaN.
pub fn rating_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => number_from_str(s),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(items) => number_from_str(&array_text(items)),
        Value::Object(_) => f64::NAN,
    }
}

/// JavaScript string-to-number conversion.
///
/// Blank is 0; `Infinity` may be signed; `0x`, `0o` and `0b` prefixes are
/// unsigned integers; otherwise a decimal literal with optional sign and
/// exponent. Anything else is NaN.
pub fn number_from_str(s: &str) -> f64 {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return integer_from_digits(&s[2..], radix);
    }

    // str::parse also takes "inf" and "nan" spellings
    if s.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

fn integer_from_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// `Array.prototype.toString` for JSON values.
fn array_text(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(inner) => array_text(inner),
            Value::Object(_) => "[object Object]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}
