use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw geometry input
// ---------------------------------------------------------------------------

/// One shape record from the geometry source. Several fragments may share a
/// name (islands, exclaves); the registry merges them into one `Country`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryFragment {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub style_color: String,
    /// Opaque path syntax, forwarded to the renderer untouched.
    pub path_data: String,
    #[serde(default)]
    pub classification: String,
}

impl CountryFragment {
    pub fn new(name: &str, path_data: &str, classification: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            style_color: String::new(),
            path_data: path_data.to_string(),
            classification: classification.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// Which end of a Country Path a country marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Endpoint {
    Start,
    End,
}

string_enum!(Endpoint {
    Start => "start",
    End => "end",
});

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Canonical name, case preserved as authored.
    pub name: String,
    pub style_color: String,
    pub boundary_paths: Vec<String>,
    pub classification: String,

    // Per-session flags, cleared by `CountryRegistry::reset_all`.
    #[serde(skip)]
    pub is_start: bool,
    #[serde(skip)]
    pub is_end: bool,
    #[serde(skip)]
    pub selected: bool,
}

impl Country {
    pub(crate) fn from_fragment(fragment: CountryFragment) -> Self {
        Self {
            name: fragment.name,
            style_color: fragment.style_color,
            boundary_paths: vec![fragment.path_data],
            classification: fragment.classification,
            is_start: false,
            is_end: false,
            selected: false,
        }
    }

    pub fn reset_flags(&mut self) {
        self.is_start = false;
        self.is_end = false;
        self.selected = false;
    }

    pub fn to_render(&self) -> RenderCountry {
        RenderCountry {
            name: self.name.clone(),
            boundary_paths: self.boundary_paths.clone(),
            style_color: self.style_color.clone(),
            selected: self.selected,
            is_start: self.is_start,
            is_end: self.is_end,
        }
    }
}

/// Read-only view of a country handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderCountry {
    pub name: String,
    pub boundary_paths: Vec<String>,
    pub style_color: String,
    pub selected: bool,
    pub is_start: bool,
    pub is_end: bool,
}
