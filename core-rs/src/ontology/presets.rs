/**
 * presets.rs
 * Canned SPARQL queries over the festival ontology
 */

use crate::errors::{ExplorerError, Result};

pub const FEST_NS: &str = "http://example.org/festividades#";

/// A SPARQL query text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

impl From<Preset> for SparqlQuery {
    fn from(preset: Preset) -> Self {
        Self::new(preset.sparql())
    }
}

const RITUAL_EVENTS: &str = r#"PREFIX fest: <http://example.org/festividades#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT ?evento ?nombre ?fecha WHERE {
  ?evento a fest:EventoRitual ;
          rdfs:label ?nombre .
  OPTIONAL { ?evento fest:tieneFecha ?fecha . }
} ORDER BY ?fecha"#;

const PLACES: &str = r#"PREFIX fest: <http://example.org/festividades#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT ?lugar ?nombre WHERE {
  ?lugar a fest:Lugar ;
         rdfs:label ?nombre .
} ORDER BY ?nombre"#;

// No inference: every participant subclass is listed explicitly.
const PARTICIPANTS: &str = r#"PREFIX fest: <http://example.org/festividades#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT ?participante ?nombre WHERE {
  {
    ?participante a fest:Ukumari
  } UNION {
    ?participante a fest:Nacion
  } UNION {
    ?participante a fest:Danzante
  } UNION {
    ?participante a fest:Individuo
  } UNION {
    ?participante a fest:Colectivo
  }
  ?participante rdfs:label ?nombre .
} ORDER BY ?nombre"#;

const DANCES: &str = r#"PREFIX fest: <http://example.org/festividades#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT ?danza ?nombre WHERE {
  ?danza a fest:Danza ;
         rdfs:label ?nombre .
} ORDER BY ?nombre"#;

const UKUMARIS: &str = r#"PREFIX fest: <http://example.org/festividades#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT ?ukumari ?nombre ?cantidad WHERE {
  ?ukumari a fest:Ukumari ;
           rdfs:label ?nombre .
  OPTIONAL { ?ukumari fest:cantidadAproximada ?cantidad . }
} ORDER BY ?nombre"#;

/// Placeholder shown in the empty custom-query editor
pub const CUSTOM_PLACEHOLDER: &str = r#"PREFIX fest: <http://example.org/festividades#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?s ?nombre WHERE {
  ?s rdfs:label ?nombre .
} LIMIT 10"#;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    #[default]
    RitualEvents,
    Places,
    Participants,
    Dances,
    Ukumaris,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::RitualEvents,
        Preset::Places,
        Preset::Participants,
        Preset::Dances,
        Preset::Ukumaris,
    ];

    /// 1-based position in the sidebar
    pub fn number(self) -> u8 {
        match self {
            Preset::RitualEvents => 1,
            Preset::Places => 2,
            Preset::Participants => 3,
            Preset::Dances => 4,
            Preset::Ukumaris => 5,
        }
    }

    pub fn from_number(number: u8) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.number() == number)
            .ok_or(ExplorerError::UnknownPreset(number))
    }

    /// Sidebar button text
    pub fn label(self) -> &'static str {
        match self {
            Preset::RitualEvents => "1. Eventos",
            Preset::Places => "2. Lugares",
            Preset::Participants => "3. Participantes",
            Preset::Dances => "4. Danzas",
            Preset::Ukumaris => "5. Ukumaris",
        }
    }

    /// Section header shown above the query text
    pub fn title(self) -> &'static str {
        match self {
            Preset::RitualEvents => "Eventos Rituales",
            Preset::Places => "Lugares",
            Preset::Participants => "Participantes",
            Preset::Dances => "Danzas",
            Preset::Ukumaris => "Ukumaris",
        }
    }

    pub fn sparql(self) -> &'static str {
        match self {
            Preset::RitualEvents => RITUAL_EVENTS,
            Preset::Places => PLACES,
            Preset::Participants => PARTICIPANTS,
            Preset::Dances => DANCES,
            Preset::Ukumaris => UKUMARIS,
        }
    }

    /// Output variables, in projection order
    pub fn variables(self) -> &'static [&'static str] {
        match self {
            Preset::RitualEvents => &["evento", "nombre", "fecha"],
            Preset::Places => &["lugar", "nombre"],
            Preset::Participants => &["participante", "nombre"],
            Preset::Dances => &["danza", "nombre"],
            Preset::Ukumaris => &["ukumari", "nombre", "cantidad"],
        }
    }
}
