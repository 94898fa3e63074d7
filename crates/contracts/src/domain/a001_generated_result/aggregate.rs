use serde::{Deserialize, Serialize};

/// Filename of the downloaded bundle when no override is configured.
pub const DEFAULT_PACKAGE_NAME: &str = "bifrost-export.zip";

/// Kind of generated content shown in the result viewer.
///
/// The identifier (`as_str`) matches the `data-tab` attribute of the tab
/// controls and the id of the content container in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Html,
    Css,
    Js,
    Preview,
}

impl ArtifactKind {
    /// Every kind, in tab order.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Html,
        ArtifactKind::Css,
        ArtifactKind::Js,
        ArtifactKind::Preview,
    ];

    /// Kinds that carry text and end up in the bundle.
    pub const EXPORTABLE: [ArtifactKind; 3] =
        [ArtifactKind::Html, ArtifactKind::Css, ArtifactKind::Js];

    /// Parses a tab identifier. Unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "html" => Some(ArtifactKind::Html),
            "css" => Some(ArtifactKind::Css),
            "js" => Some(ArtifactKind::Js),
            "preview" => Some(ArtifactKind::Preview),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Html => "html",
            ArtifactKind::Css => "css",
            ArtifactKind::Js => "js",
            ArtifactKind::Preview => "preview",
        }
    }

    /// Human readable tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Html => "HTML",
            ArtifactKind::Css => "CSS",
            ArtifactKind::Js => "JavaScript",
            ArtifactKind::Preview => "Preview",
        }
    }

    /// `true` for kinds rendered as highlighted source code.
    pub fn is_code(&self) -> bool {
        !matches!(self, ArtifactKind::Preview)
    }

    /// Fixed entry name inside the exported bundle.
    pub fn export_filename(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::Html => Some("index.html"),
            ArtifactKind::Css => Some("styles.css"),
            ArtifactKind::Js => Some("script.js"),
            ArtifactKind::Preview => None,
        }
    }

    /// Language class understood by the syntax highlighter.
    pub fn language_class(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::Html => Some("language-html"),
            ArtifactKind::Css => Some("language-css"),
            ArtifactKind::Js => Some("language-javascript"),
            ArtifactKind::Preview => None,
        }
    }
}

/// One piece of generated source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub text_content: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, text_content: impl Into<String>) -> Self {
        Self {
            kind,
            text_content: text_content.into(),
        }
    }
}

/// All artifacts of one generation result.
///
/// Populated once from the server-rendered page and never mutated afterwards.
/// The preview kind has no text; it is represented by the design image source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
    preview_src: Option<String>,
}

impl ArtifactSet {
    pub fn new(
        html: impl Into<String>,
        css: impl Into<String>,
        js: impl Into<String>,
    ) -> Self {
        Self {
            artifacts: vec![
                Artifact::new(ArtifactKind::Html, html),
                Artifact::new(ArtifactKind::Css, css),
                Artifact::new(ArtifactKind::Js, js),
            ],
            preview_src: None,
        }
    }

    pub fn with_preview(mut self, src: impl Into<String>) -> Self {
        self.preview_src = Some(src.into());
        self
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Current text of a code artifact. `None` for the preview kind.
    pub fn text(&self, kind: ArtifactKind) -> Option<&str> {
        self.get(kind).map(|a| a.text_content.as_str())
    }

    pub fn preview_src(&self) -> Option<&str> {
        self.preview_src.as_deref()
    }

    /// `(entry name, contents)` for every exportable artifact, in bundle order.
    pub fn export_entries(&self) -> Vec<(&'static str, &str)> {
        ArtifactKind::EXPORTABLE
            .iter()
            .filter_map(|kind| {
                let name = kind.export_filename()?;
                Some((name, self.text(*kind).unwrap_or("")))
            })
            .collect()
    }
}
