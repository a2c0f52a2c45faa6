//! SGR escape-sequence encoding.
//!
//! Terminals change text color and style when they see a CSI SGR sequence
//! of the form `ESC [ v1;v2;v3 m`, where each `v` is a numeric code. This
//! module maps string identifiers (display mode, foreground, background)
//! to those codes and wraps a string in a single opening sequence plus a
//! trailing reset.
//!
//! # Identifier tables
//!
//! | Table | Identifiers |
//! |-------|-------------|
//! | mode | `normal` 0, `bold` 1, `dim` 2, `underline` 4, `blink` 5, `invert` 7, `hide` 8 |
//! | foreground | `black` 30, `red` 31, `green` 32, `yellow` 33, `blue` 34, `magenta` 35, `cyan` 36, `white` 37 |
//! | background | same names, 40–47 |
//!
//! An unknown or absent identifier resolves to 0 (terminal default). That
//! is a documented fallback, not an error: styling a log line should never
//! fail because a rule author misspelled a color.
//!
//! # Code ordering
//!
//! Within one sequence, a later code overrides an earlier code of the same
//! kind, so the relative order of mode/foreground/background does not
//! matter to the terminal. Code 0 is the exception: it resets *everything*
//! before it. [`encode`] therefore sorts the three codes ascending, which
//! pins any 0 to the first slot no matter which parameter produced it.

use serde::Deserialize;

/// The SGR reset code, also the fallback for unknown identifiers.
pub const RESET: u8 = 0;

/// Resolves a display-mode identifier to its SGR code.
fn mode_code(name: &str) -> u8 {
    match name {
        "normal" => 0,
        "bold" => 1,
        "dim" => 2,
        "underline" => 4,
        "blink" => 5,
        "invert" => 7,
        "hide" => 8,
        _ => RESET,
    }
}

/// Resolves a foreground-color identifier to its SGR code.
fn fore_code(name: &str) -> u8 {
    match name {
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" | "purple" => 35,
        "cyan" => 36,
        "white" => 37,
        _ => RESET,
    }
}

/// Resolves a background-color identifier to its SGR code.
fn back_code(name: &str) -> u8 {
    match name {
        "black" => 40,
        "red" => 41,
        "green" => 42,
        "yellow" => 43,
        "blue" => 44,
        "magenta" | "purple" => 45,
        "cyan" => 46,
        "white" => 47,
        _ => RESET,
    }
}

/// A style to apply to a span of text: display mode, foreground color,
/// background color, each optional.
///
/// Specs are built with combinators or deserialized from YAML:
///
/// ```rust
/// use tinge::StyleSpec;
///
/// let spec = StyleSpec::new().mode("bold").fore("yellow");
/// let parsed: StyleSpec = serde_yaml::from_str("{fore: yellow, mode: bold}").unwrap();
/// assert_eq!(spec, parsed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSpec {
    /// Display mode identifier (`bold`, `dim`, ...).
    #[serde(default)]
    pub mode: Option<String>,

    /// Foreground color identifier.
    #[serde(default, alias = "foreground")]
    pub fore: Option<String>,

    /// Background color identifier.
    #[serde(default, alias = "background")]
    pub back: Option<String>,
}

impl StyleSpec {
    /// Creates an empty spec (all three identifiers absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display mode.
    pub fn mode(mut self, name: &str) -> Self {
        self.mode = Some(name.to_string());
        self
    }

    /// Sets the foreground color.
    pub fn fore(mut self, name: &str) -> Self {
        self.fore = Some(name.to_string());
        self
    }

    /// Sets the background color.
    pub fn back(mut self, name: &str) -> Self {
        self.back = Some(name.to_string());
        self
    }

    /// Resolves the three identifiers to SGR codes, sorted ascending.
    ///
    /// Sorting keeps a 0 (reset) in the first slot, where it cannot
    /// cancel the codes that follow it.
    pub fn codes(&self) -> [u8; 3] {
        let resolve = |id: &Option<String>, table: fn(&str) -> u8| {
            id.as_deref().map(table).unwrap_or(RESET)
        };
        let mut codes = [
            resolve(&self.mode, mode_code),
            resolve(&self.fore, fore_code),
            resolve(&self.back, back_code),
        ];
        codes.sort_unstable();
        codes
    }
}

/// Whether styling is active for a given context.
///
/// There is deliberately no process-wide toggle: the mode is part of a
/// [`Styler`](crate::Styler) and immutable after construction, so
/// concurrent renders with different settings cannot race.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleMode {
    /// Emit SGR escape sequences.
    #[default]
    Ansi,
    /// Pass text through unchanged (piped output, tests, `NO_COLOR`).
    Plain,
}

/// Wraps `text` in the SGR sequence for `spec`, followed by a reset.
///
/// The emitted form is exactly `\x1b[{v1};{v2};{v3}m{text}\x1b[0m` with
/// the codes sorted ascending. In [`StyleMode::Plain`] this is the
/// identity function.
///
/// ```rust
/// use tinge::{encode, StyleMode, StyleSpec};
///
/// let styled = encode("ok", &StyleSpec::new().fore("green"), StyleMode::Ansi);
/// assert_eq!(styled, "\x1b[0;0;32mok\x1b[0m");
/// ```
pub fn encode(text: &str, spec: &StyleSpec, mode: StyleMode) -> String {
    if mode == StyleMode::Plain {
        return text.to_string();
    }
    let [v1, v2, v3] = spec.codes();
    format!("\x1b[{};{};{}m{}\x1b[0m", v1, v2, v3, text)
}
