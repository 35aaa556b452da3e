//! Turning RDF terms into table cells

use oxigraph::model::Term;

/// How bound values are rendered in result rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Festival IRIs reduced to their local name, other web IRIs to their last segment
    #[default]
    Shortened,
    /// Plain string form, untouched
    Raw,
}

/// Plain string form of a term: bare IRI, literal lexical value or blank node id
pub fn term_text(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_owned(),
        Term::BlankNode(node) => node.as_str().to_owned(),
        Term::Literal(literal) => literal.value().to_owned(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

/// Shorten a value for display.
///
/// A value containing `marker` keeps only what follows the last occurrence of
/// the marker's final character (`#` for `festividades#`). Otherwise an
/// `http(s)://` identifier keeps its last non-empty path segment. Anything else
/// is returned as is.
///
/// The marker is matched anywhere in the string, so a literal that happens to
/// contain it is truncated too.
pub fn shorten(value: &str, marker: &str) -> String {
    if let Some(separator) = marker.chars().last() {
        if value.contains(marker) {
            return value.rsplit(separator).next().unwrap_or(value).to_owned();
        }
    }

    if value.starts_with("http://") || value.starts_with("https://") {
        let trimmed = value.trim_end_matches('/');
        let (_, path) = trimmed.split_once("://").unwrap_or(("", trimmed));
        if let Some((_, segment)) = path.rsplit_once('/') {
            return segment.to_owned();
        }
    }

    value.to_owned()
}

/// Render an optional binding as a cell; unbound becomes ""
pub fn cell(term: Option<&Term>, mode: DisplayMode, marker: &str) -> String {
    match term {
        None => String::new(),
        Some(term) => {
            let text = term_text(term);
            match mode {
                DisplayMode::Raw => text,
                DisplayMode::Shortened => shorten(&text, marker),
            }
        }
    }
}
