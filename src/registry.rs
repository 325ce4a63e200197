//! Dispatch from document text to the matching document class

use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::document_class::{DocumentClass, IOPART, QUANTUMARTICLE, REVTEX};
use crate::error::{FormatterError, Result};
use crate::formatter::ClassFormatter;
use crate::preamble;

/// Ordered list of document classes; the first one matching wins.
///
/// No identifier of a class may occur inside the declaration of a class
/// registered before it, or documents of the later class would be routed to
/// the earlier one.
#[derive(Debug, Clone)]
pub struct Registry {
    classes: Vec<&'static DocumentClass>,
}

impl Registry {
    /// A registry without any classes
    pub fn empty() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Append a class. It is tried after all classes registered so far.
    pub fn register(mut self, class: &'static DocumentClass) -> Self {
        trace!("Registering document class {}", class.name);
        self.classes.push(class);
        self
    }

    pub fn classes(&self) -> &[&'static DocumentClass] {
        &self.classes
    }

    /// Find the formatter for already cleaned text
    pub fn find(&self, cleaned: &str) -> Option<ClassFormatter> {
        self.classes.iter().find_map(|class| class.parse(cleaned))
    }

    /// Strip comments from `text` and find the formatter of its document class
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn resolve(&self, text: &str) -> Result<ClassFormatter> {
        let cleaned = preamble::clean(text);
        match self.find(&cleaned) {
            Some(formatter) => {
                debug!("Resolved document class {}", formatter.class().name);
                Ok(formatter)
            }
            None => {
                debug!("None of {} document classes matched", self.classes.len());
                Err(FormatterError::NoMatch)
            }
        }
    }

    /// Read the file at `path` and resolve its whole content
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> Result<ClassFormatter> {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.resolve(&content)
    }
}

impl Default for Registry {
    /// All supported classes: quantumarticle, revtex, iopart
    fn default() -> Self {
        Self::empty()
            .register(&QUANTUMARTICLE)
            .register(&REVTEX)
            .register(&IOPART)
    }
}

/// Get the formatter for a document.
///
/// `source` is either the path of an existing TeX file or TeX source itself.
/// The whole file is scanned, not just the part before `\begin{document}`.
pub fn setup(source: &str) -> Result<ClassFormatter> {
    let registry = Registry::default();
    let path = Path::new(source);
    if path.is_file() {
        debug!("Reading document from {}", path.display());
        registry.resolve_path(path)
    } else {
        registry.resolve(source)
    }
}

/// Get the formatter for the TeX file at `path`
pub fn setup_path<P: AsRef<Path>>(path: P) -> Result<ClassFormatter> {
    Registry::default().resolve_path(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::formatter::{FigureFormat, FigureOptions};
    use crate::options::{BaseSize, Columns, Paper, ParsedOptions};

    const DUMMY_DOCUMENT: &str = "\\documentclass[\n\
        \ttwoside,\n\
        \ta4paper, \t\t\t\t\t\t% A4 Format benutzen\n\
        %\theadsepline,\t\t\t\t\t\t% Linie nach Kopfzeile\n\
        ]{quantumarticle}\t\t\t\t\t\t\t% oder auch \"scrartcl\"\n\
        \n\
        \\pdfoutput=1\n\
        \n\
        \\usepackage{amsmath} \t\t\t\t\t% Paket \n\
        \\usepackage{amssymb} \t\t\t\t\t% Paket\n\
        \n\
        \\begin{document}\n\
        Some text with 100\\% of the content.\n\
        \\end{document}\n";

    fn declare(class: &str, options: &[&str]) -> String {
        format!(r"\documentclass[{}]{{{}}}", options.join(","), class)
    }

    #[test]
    fn test_default_registration_order() {
        let names: Vec<_> = Registry::default()
            .classes()
            .iter()
            .map(|class| class.name)
            .collect();
        assert_eq!(names, ["quantumarticle", "revtex", "iopart"]);
    }

    #[test]
    fn test_identifiers_do_not_shadow_later_classes() {
        let registry = Registry::default();
        for (index, class) in registry.classes().iter().enumerate() {
            for identifier in class.identifiers {
                let declaration = format!(r"\documentclass{}", identifier);
                for earlier in &registry.classes()[..index] {
                    assert!(!earlier.matches(&declaration), "{identifier}");
                }
            }
        }
    }

    #[test]
    fn test_round_trip_quantumarticle() {
        let registry = Registry::default();
        for (columns, column_token) in [(Columns::One, "onecolumn"), (Columns::Two, "twocolumn")] {
            for (paper, paper_token) in [(Paper::A4, "a4paper"), (Paper::Letter, "letterpaper")] {
                for (size, size_token) in [
                    (BaseSize::Ten, "10pt"),
                    (BaseSize::Eleven, "11pt"),
                    (BaseSize::Twelve, "12pt"),
                ] {
                    let text = declare("quantumarticle", &[column_token, paper_token, size_token]);
                    let formatter = registry.resolve(&text).unwrap();
                    assert_eq!(formatter.class().name, "quantumarticle");
                    assert_eq!(
                        *formatter.options(),
                        ParsedOptions::new(columns, Some(paper), size),
                        "{text}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_revtex_and_iopart() {
        let registry = Registry::default();
        for (size, size_token) in [
            (BaseSize::Ten, "10pt"),
            (BaseSize::Eleven, "11pt"),
            (BaseSize::Twelve, "12pt"),
        ] {
            for class in ["revtex4-1", "revtex4-2"] {
                let one = registry
                    .resolve(&declare(class, &["onecolumn", size_token]))
                    .unwrap();
                assert_eq!(*one.options(), ParsedOptions::new(Columns::One, None, size));

                let two = registry
                    .resolve(&declare(class, &["twocolumn", size_token]))
                    .unwrap();
                assert_eq!(*two.options(), ParsedOptions::new(Columns::Two, None, size));
            }

            let one = registry.resolve(&declare("iopart", &[size_token])).unwrap();
            assert_eq!(*one.options(), ParsedOptions::new(Columns::One, None, size));

            let text = format!("{}\n\\ioptwocol", declare("iopart", &[size_token]));
            let two = registry.resolve(&text).unwrap();
            assert_eq!(*two.options(), ParsedOptions::new(Columns::Two, None, size));
        }
    }

    #[test]
    fn test_unsupported_class_is_no_match() {
        let registry = Registry::default();
        for text in [
            r"\documentclass{article}",
            r"\documentclass[10pt]{revtex}",
            r"\documentclass{IOPART}",
            "",
        ] {
            assert!(matches!(
                registry.resolve(text),
                Err(FormatterError::NoMatch)
            ));
        }
    }

    #[test]
    fn test_empty_registry_never_matches() {
        let registry = Registry::empty();
        assert!(registry.resolve(r"\documentclass{quantumarticle}").is_err());
    }

    #[test]
    fn test_no_match_message_mentions_both_causes() {
        let message = FormatterError::NoMatch.to_string();
        assert!(message.contains("not supported"));
        assert!(message.contains("file path does not exist"));
    }

    #[test]
    fn test_commented_class_is_ignored() {
        let formatter = Registry::default()
            .resolve("%\\documentclass{revtex4-1}\n\\documentclass{quantumarticle}")
            .unwrap();
        assert_eq!(formatter.class().name, "quantumarticle");

        let result = Registry::default().resolve("%\\documentclass{revtex4-1}");
        assert!(matches!(result, Err(FormatterError::NoMatch)));
    }

    #[test]
    fn test_commented_option_is_ignored() {
        let formatter = Registry::default()
            .resolve("\\documentclass[\n%onecolumn,\n11pt]{revtex4-1}")
            .unwrap();
        assert_eq!(formatter.options().columns, Columns::Two);
        assert_eq!(formatter.options().font_size, BaseSize::Eleven);
    }

    #[test]
    fn test_first_registered_class_wins() {
        let formatter = Registry::default()
            .resolve("\\documentclass{revtex4-1}\n\\documentclass{quantumarticle}")
            .unwrap();
        assert_eq!(formatter.class().name, "quantumarticle");

        let reversed = Registry::empty().register(&REVTEX).register(&QUANTUMARTICLE);
        let formatter = reversed
            .resolve("\\documentclass{revtex4-1}\n\\documentclass{quantumarticle}")
            .unwrap();
        assert_eq!(formatter.class().name, "revtex");
    }

    #[test]
    fn test_revtex_default_square_figure() {
        let formatter = setup(r"\documentclass{revtex4-1}").unwrap();
        assert_eq!(formatter.column_width().unwrap(), 3.42);

        let size = formatter
            .figure_size(&FigureOptions::new().with_aspect_ratio(1.0))
            .unwrap();
        assert_eq!(size.width, 3.42);
        assert_eq!(size.height, 3.42);
    }

    #[test]
    fn test_setup_from_path_matches_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DUMMY_DOCUMENT.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let from_text = setup(r"\documentclass[twoside,a4paper,headsepline]{quantumarticle}")
            .unwrap();
        let from_path = setup(&path).unwrap();
        assert_eq!(from_text, from_path);
        assert_eq!(setup_path(file.path()).unwrap(), from_text);
    }

    #[test]
    fn test_setup_scans_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "\\documentclass[12pt]{{iopart}}\n\\begin{{document}}\n\\ioptwocol\n\\end{{document}}\n"
        )
        .unwrap();

        let formatter = setup_path(file.path()).unwrap();
        assert_eq!(formatter.options().columns, Columns::Two);
        assert_eq!(formatter.options().font_size, BaseSize::Twelve);
    }

    #[test]
    fn test_setup_missing_path_is_no_match() {
        let result = setup("/definitely/not/a/real/path/paper.tex");
        assert!(matches!(result, Err(FormatterError::NoMatch)));
    }

    #[test]
    fn test_setup_path_surfaces_io_errors() {
        let result = setup_path("/definitely/not/a/real/path/paper.tex");
        assert!(matches!(result, Err(FormatterError::Io(_))));
    }
}
