//! Rust source emission.
//!
//! [`RustFile`] accumulates a generated source file line by line; the
//! [`generate_module`] function uses it to render a checked-in gamma table
//! module with a documented `pub const` array, wrapped the way rustfmt
//! lays out long integer arrays.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use crate::config::TableConfiguration;
use crate::error::{GammaError, Result};
use crate::remap::generate;

/// Column limit for wrapped array values, matching rustfmt's default.
pub const MAX_WIDTH: usize = 100;

const INDENT: &str = "    ";

/// Builder for a generated Rust source file.
#[derive(Debug, Default)]
pub struct RustFile {
    /// Accumulated source text.
    pub buf: String,
}

impl RustFile {
    /// Starts a file whose first lines are the `//!` module doc `module_doc`.
    ///
    /// Each line of `module_doc` becomes one `//!` line.
    pub fn new(module_doc: &str) -> Self {
        let mut f = Self::default();
        for line in module_doc.lines() {
            if line.is_empty() {
                f.line("//!");
            } else {
                let _ = writeln!(f.buf, "//! {line}");
            }
        }
        f.blank();
        f
    }

    /// Appends one line.
    pub fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a `//` comment line; an empty `text` gives a bare `//`.
    pub fn comment(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//");
        } else {
            let _ = writeln!(self.buf, "// {text}");
        }
    }

    /// Appends a `///` doc comment line.
    pub fn doc_comment(&mut self, text: &str) {
        if text.is_empty() {
            self.line("///");
        } else {
            let _ = writeln!(self.buf, "/// {text}");
        }
    }

    /// Appends `values` as indented, comma-terminated lines no wider than
    /// [`MAX_WIDTH`].
    pub fn wrapped_values(&mut self, values: &[i64]) {
        let mut current = String::from(INDENT);
        for value in values {
            let token = format!("{value},");
            let needs_space = current.len() > INDENT.len();
            let extra = token.len() + usize::from(needs_space);
            if needs_space && current.len() + extra > MAX_WIDTH {
                self.line(&current);
                current.truncate(INDENT.len());
            } else if needs_space {
                current.push(' ');
            }
            current.push_str(&token);
        }
        if current.len() > INDENT.len() {
            self.line(&current);
        }
    }

    /// Consumes the builder and returns the source text.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Renders a complete module holding one `pub const` gamma table.
///
/// The constant is named `name`, or [`default_table_name`] of `gamma` when
/// `name` is `None`.
///
/// # Errors
///
/// Returns [`GammaError::InvalidIdentifier`] if `name` is not a Rust identifier.
pub fn generate_module(
    gamma: f64,
    config: &TableConfiguration,
    name: Option<&str>,
) -> Result<String> {
    let name = match name {
        Some(n) if is_rust_identifier(n) => n.to_string(),
        Some(n) => return Err(GammaError::InvalidIdentifier(n.to_string())),
        None => default_table_name(gamma),
    };
    let table = generate(gamma, config);
    let table_formula = formula(config, &gamma.to_string());

    let mut f = RustFile::new(&format!(
        "Precomputed gamma table for a fixed exponent.\n\
         \n\
         Precomputes {}\n\
         \n\
         Where the domain x and range f(x) are integers and gamma is fixed. Index the\n\
         table with an input intensity to get the corrected intensity.\n",
        formula(config, "gamma"),
    ));

    f.comment(&format!("Table for {table_formula}"));
    f.comment("");
    let _ = writeln!(
        f.buf,
        "pub const {name}: [{}; {}] = [",
        config.type_label(),
        config.entry_count()
    );
    f.wrapped_values(&table);
    f.line("];");

    Ok(f.finish())
}

/// `f(x) = ((x/1024) ^ 2.2 ) * 1024` for the given configuration.
fn formula(config: &TableConfiguration, gamma: &str) -> String {
    format!(
        "f(x) = ((x/{}) ^ {gamma} ) * {}",
        config.input_divisor(),
        config.output_scale()
    )
}

/// `GAMMA_<digits>` for `gamma`: `2.2` gives `GAMMA_22`, `0.45` gives
/// `GAMMA_045`, `-1.5` gives `GAMMA_NEG_15`.
pub fn default_table_name(gamma: f64) -> String {
    let digits: String = gamma
        .abs()
        .to_string()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if gamma.is_sign_negative() && !gamma.is_nan() {
        format!("GAMMA_NEG_{digits}")
    } else {
        format!("GAMMA_{digits}")
    }
}

/// True when `name` is a plain (non-raw) Rust identifier and not a keyword.
pub fn is_rust_identifier(name: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "_",
    ];
    let mut chars = name.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());
    starts_ok && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && !KEYWORDS.contains(&name)
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`GammaError::Io`] if a directory or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let io_err = |source| GammaError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    fs::write(path, content).map_err(io_err)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::serializer::literal::parse_literal;

    #[test]
    fn module_layout() {
        let config = Preset::Entries257.configuration();
        let text = generate_module(1.7, &config, None).unwrap();
        assert!(text.starts_with("//! Precomputed gamma table for a fixed exponent.\n//!\n"));
        assert!(text.contains("//! Precomputes f(x) = ((x/256) ^ gamma ) * 256\n"));
        assert!(text.contains("\n\n// Table for f(x) = ((x/256) ^ 1.7 ) * 256\n//\n"));
        assert!(text.contains("pub const GAMMA_17: [u16; 257] = [\n    0, 0, 0,"));
        assert!(text.ends_with(" 252, 254, 256,\n];\n"));
    }

    #[test]
    fn wrapped_lines_stay_within_width() {
        let config = Preset::Entries1025.configuration();
        let text = generate_module(0.45, &config, Some("LUT")).unwrap();
        for line in text.lines() {
            assert!(line.len() <= MAX_WIDTH, "line too long: {line}");
        }
        let body: Vec<&str> = text.lines().filter(|l| l.starts_with(INDENT)).collect();
        assert!(body.len() > 1);
        assert!(body.iter().all(|l| l.ends_with(',')));
    }

    #[test]
    fn module_values_match_generate() {
        let config = Preset::Entries256.configuration();
        let text = generate_module(2.2, &config, Some("SRGB_ISH")).unwrap();
        let parsed = parse_literal(&text).unwrap();
        assert_eq!(parsed.name, "SRGB_ISH");
        assert_eq!(parsed.type_label, "u8");
        assert_eq!(parsed.values, generate(2.2, &config));
    }

    #[test]
    fn default_names() {
        assert_eq!(default_table_name(2.2), "GAMMA_22");
        assert_eq!(default_table_name(0.45), "GAMMA_045");
        assert_eq!(default_table_name(1.0), "GAMMA_1");
        assert_eq!(default_table_name(-1.5), "GAMMA_NEG_15");
        assert_eq!(default_table_name(f64::INFINITY), "GAMMA_INF");
        assert!(is_rust_identifier(&default_table_name(f64::NAN)));
    }

    #[test]
    fn rejects_bad_identifiers() {
        let config = Preset::Entries256.configuration();
        for bad in ["", "1ABC", "A-B", "const", "two words"] {
            assert!(matches!(
                generate_module(2.0, &config, Some(bad)),
                Err(GammaError::InvalidIdentifier(_))
            ));
        }
        assert!(is_rust_identifier("_gamma"));
    }

    #[test]
    fn rust_file_builder() {
        let mut f = RustFile::new("Line one.\n\nLine two.");
        f.doc_comment("Doc.");
        f.line("pub const X: u8 = 1;");
        assert_eq!(
            f.finish(),
            "//! Line one.\n//!\n//! Line two.\n\n/// Doc.\npub const X: u8 = 1;\n"
        );
    }

    #[test]
    fn write_file_creates_parents() {
        let dir = std::env::temp_dir().join(format!("gamma-lut-emit-{}", std::process::id()));
        let path = dir.join("nested").join("gamma.rs");
        write_file(&path, "const X: u8 = 0;\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "const X: u8 = 0;\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
