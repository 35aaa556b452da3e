//! HTML rendering of the explorer page
//!
//! Pure functions from session state to markup; handlers never build HTML.

use std::fmt::Write;

use crate::ontology::{Preset, CUSTOM_PLACEHOLDER};
use crate::query::ResultSet;
use crate::session::{ExplorerSession, QuerySource};

const PAGE_TITLE: &str = "Qoyllur Rit'i";
const HEADING: &str = "⛰️ Explorador SPARQL Qoyllur Rit'i";

/// Shown when the custom editor is submitted empty
pub const MISSING_QUERY_WARNING: &str = "Escribe una consulta primero";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; }
nav { width: 14rem; padding: 1rem; background: #f0f2f6; min-height: 100vh; }
nav button { width: 100%; margin-bottom: .4rem; }
nav button.selected { font-weight: bold; }
main { flex: 1; padding: 1rem 2rem; }
pre { background: #f6f8fa; padding: .8rem; overflow-x: auto; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: .3rem .6rem; text-align: left; }
.success { color: #0a6b2d; } .warning { color: #8a6100; } .error { color: #a4161a; }
textarea { width: 100%; height: 150px; font-family: monospace; }
"#;

const EXPLANATION: &str = r#"<p><strong>Consulta que no devuelve participantes:</strong></p>
<pre><code>SELECT ?participante ?nombre WHERE {
  ?participante a fest:Participante ;
                rdfs:label ?nombre .
}</code></pre>
<p>Los individuos se declaran con su clase concreta, por ejemplo
<code>:Ukumaris_Paucartambo_2025</code> es un <code>fest:Ukumari</code> y
<code>:NacionPaucartambo</code> una <code>fest:Nacion</code>. Sin un razonador,
SPARQL no sigue <code>rdfs:subClassOf</code>, así que nadie aparece como
<code>fest:Participante</code>.</p>
<p><strong>La consulta 3</strong> une explícitamente las cinco subclases
(<code>Ukumari</code>, <code>Nacion</code>, <code>Danzante</code>,
<code>Individuo</code>, <code>Colectivo</code>) y luego pide la etiqueta.</p>"#;

/// Escape text for element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(PAGE_TITLE),
        STYLE,
        body
    )
}

/// Page shown when the ontology could not be loaded
pub fn load_error_page(message: &str) -> String {
    document(&format!(
        "<main>\n<h1>{}</h1>\n<p class=\"error\">❌ No se pudo cargar la ontología: {}</p>\n</main>\n",
        HEADING,
        escape_html(message)
    ))
}

/// Full explorer page for the current session
pub fn page(session: &ExplorerSession) -> String {
    let mut body = String::new();

    body.push_str(&sidebar(session.selected()));

    body.push_str("<main>\n");
    let _ = writeln!(body, "<h1>{}</h1>", HEADING);

    let selected = session.selected();
    let _ = writeln!(body, "<h2>{}</h2>", escape_html(selected.title()));
    let _ = writeln!(
        body,
        "<pre><code class=\"language-sparql\">{}</code></pre>",
        escape_html(selected.sparql())
    );
    body.push_str("<form method=\"post\" action=\"/run\"><button type=\"submit\">EJECUTAR CONSULTA</button></form>\n");

    body.push_str(&results_section(session));

    body.push_str("<hr>\n<h3>Consulta Personalizada</h3>\n");
    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"/custom\">\n<label for=\"query\">Escribe tu consulta SPARQL:</label>\n<textarea id=\"query\" name=\"query\" placeholder=\"{}\">{}</textarea>\n<label><input type=\"checkbox\" name=\"short\" value=\"on\"> Acortar identificadores</label>\n<button type=\"submit\">EJECUTAR PERSONALIZADA</button>\n</form>",
        escape_html(CUSTOM_PLACEHOLDER),
        escape_html(session.custom_text())
    );

    let _ = writeln!(
        body,
        "<details>\n<summary>📖 ¿Por qué esta consulta SÍ funciona?</summary>\n{}\n</details>",
        EXPLANATION
    );
    body.push_str("</main>\n");

    document(&body)
}

fn sidebar(selected: Preset) -> String {
    let mut nav = String::from("<nav>\n<h2>Seleccionar Consulta</h2>\n");
    for preset in Preset::ALL {
        let class = if preset == selected { " class=\"selected\"" } else { "" };
        let _ = writeln!(
            nav,
            "<form method=\"post\" action=\"/select\"><button type=\"submit\" name=\"preset\" value=\"{}\"{}>{}</button></form>",
            preset.number(),
            class,
            escape_html(preset.label())
        );
    }
    nav.push_str("</nav>\n");
    nav
}

fn results_section(session: &ExplorerSession) -> String {
    let mut section = String::from("<section id=\"results\">\n");

    if let Some(message) = session.last_error() {
        let _ = writeln!(section, "<p class=\"error\">❌ Error: {}</p>", escape_html(message));
    }

    if session.missing_query() {
        let _ = writeln!(section, "<p class=\"warning\">⚠️ {}</p>", MISSING_QUERY_WARNING);
    }

    if let Some(results) = session.last_results() {
        if results.is_empty() {
            section.push_str("<p class=\"warning\">⚠️ Sin resultados</p>\n");
        } else {
            let banner = match session.last_source() {
                Some(QuerySource::Custom) => format!("✅ {} resultados", results.len()),
                _ => format!("✅ Resultados: {}", results.len()),
            };
            let _ = writeln!(section, "<p class=\"success\">{}</p>", banner);
            section.push_str(&table(results));
            section.push_str("<p><a href=\"/results.csv\" download>📥 Descargar CSV</a></p>\n");
        }
    }

    section.push_str("</section>\n");
    section
}

/// Result set as an HTML table
pub fn table(results: &ResultSet) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for variable in results.variables() {
        let _ = write!(html, "<th>{}</th>", escape_html(variable));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in results.rows() {
        html.push_str("<tr>");
        for cell in row.cells() {
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}
