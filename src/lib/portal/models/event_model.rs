//! Module with academic event models compatible with the portal REST API
use std::fmt;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use super::{lenient_string, Identified};

/// Target audience labels, spelled the way the API stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AudienceLabel {
    Students,
    Professors,
    GeneralPublic,
}

impl AudienceLabel {
    pub const ALL: [AudienceLabel; 3] = [
        AudienceLabel::Students,
        AudienceLabel::Professors,
        AudienceLabel::GeneralPublic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceLabel::Students => "Estudiantes",
            AudienceLabel::Professors => "Profesores",
            AudienceLabel::GeneralPublic => "Público general",
        }
    }
}

impl fmt::Display for AudienceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience of an event. Travels as a JSON-encoded string (`"[\"Estudiantes\"]"`),
/// but older records hold a plain array or a single bare label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audience(Vec<String>);

impl Audience {
    /// Builds the audience in checkbox order, whatever order the labels come in.
    pub fn from_labels(labels: &[AudienceLabel]) -> Self {
        Audience(
            AudienceLabel::ALL
                .iter()
                .filter(|label| labels.contains(label))
                .map(|label| label.as_str().to_owned())
                .collect(),
        )
    }

    /// Parses the transported form: a JSON array inside a string, or a bare label.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Audience::default();
        }
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(labels) => Audience(labels),
            Err(_) => Audience(vec![raw.to_owned()]),
        }
    }

    pub fn contains(&self, label: AudienceLabel) -> bool {
        self.0.iter().any(|l| l == label.as_str())
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON-encoded string sent to the API.
    pub fn to_transport(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(", "))
    }
}

impl Serialize for Audience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self.to_transport().map_err(ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)
            .map_err(|_| de::Error::custom("audience must be a list of labels or a JSON string"))?
        {
            None => Ok(Audience::default()),
            Some(Raw::List(labels)) => Ok(Audience(labels)),
            Some(Raw::Text(raw)) => Ok(Audience::parse(&raw)),
        }
    }
}

/// Register/edit form of an academic event. Dates are `YYYY-MM-DD`, times `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventForm {
    #[serde(rename = "nombre_evento")]
    pub name: String,
    #[serde(rename = "tipo_evento")]
    pub kind: String,
    #[serde(rename = "fecha_realizacion", deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(rename = "hora_inicio", deserialize_with = "lenient_string")]
    pub start_time: String,
    #[serde(rename = "hora_fin", deserialize_with = "lenient_string")]
    pub end_time: String,
    #[serde(rename = "lugar")]
    pub location: String,
    #[serde(rename = "publico_objetivo")]
    pub audience: Audience,
    #[serde(rename = "programa_educativo", deserialize_with = "lenient_string")]
    pub education_program: String,
    #[serde(rename = "responsable_evento_id", deserialize_with = "lenient_string")]
    pub responsible_id: String,
    #[serde(rename = "descripcion_breve")]
    pub description: String,
    #[serde(rename = "cupo_maximo", deserialize_with = "lenient_string")]
    pub capacity: String,
}

pub type AcademicEvent = Identified<EventForm>;
