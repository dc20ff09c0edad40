//! ANSI colors for extensions and emphasis.

use std::collections::HashMap;

/// Escape sequence that resets all attributes.
const RESET: &str = "\x1b[0m";

/// Name of the bold style in the default palette.
pub const BOLD: &str = "bwhite";

/// Maps color names (extension ids, plus [`BOLD`]) to ANSI escapes.
///
/// A disabled palette paints nothing, for output that is not a terminal.
#[derive(Debug, Clone)]
pub struct Palette {
    codes: HashMap<String, String>,
    enabled: bool,
}

impl Palette {
    /// Create a palette from `(name, escape)` pairs.
    pub fn new<I, K, V>(codes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            enabled: true,
        }
    }

    /// The SuperVia extension colors.
    pub fn supervia() -> Self {
        Self::new([
            ("santa_cruz", "\x1b[0;32m"),
            ("paracambi", "\x1b[0;36m"),
            ("japeri", "\x1b[0;34m"),
            ("saracuruna", "\x1b[0;33m"),
            (BOLD, "\x1b[1m"),
        ])
    }

    /// A palette that emits no escape codes.
    pub fn plain() -> Self {
        Self {
            codes: HashMap::new(),
            enabled: false,
        }
    }

    /// Paint `text` with the color called `name`.
    ///
    /// Unknown names get no color prefix but still a reset.
    pub fn paint(&self, text: &str, name: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let code = self.codes.get(name).map_or("", String::as_str);
        format!("{code}{text}{RESET}")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::supervia()
    }
}
