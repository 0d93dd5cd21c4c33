//! Artifact kinds and formats
//!
//! Every recording exposes three kinds of downloadable artifact. Each kind is
//! available in a fixed set of formats, attempted in the order listed here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of downloadable artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    Audio,
    Transcript,
    Summary,
}

impl ArtifactKind {
    /// All kinds in processing order
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Audio,
        ArtifactKind::Transcript,
        ArtifactKind::Summary,
    ];

    /// Formats attempted for this kind, in order
    pub fn formats(self) -> &'static [ArtifactFormat] {
        match self {
            ArtifactKind::Audio => &[ArtifactFormat::Mp3],
            ArtifactKind::Transcript => &[
                ArtifactFormat::Txt,
                ArtifactFormat::Pdf,
                ArtifactFormat::Docx,
                ArtifactFormat::Srt,
            ],
            ArtifactKind::Summary => &[
                ArtifactFormat::Txt,
                ArtifactFormat::Pdf,
                ArtifactFormat::Docx,
            ],
        }
    }

    /// Base file name for an artifact of this kind belonging to `recording_name`.
    ///
    /// Audio keeps the bare recording name; documents get a kind prefix.
    pub fn file_stem(self, recording_name: &str) -> String {
        match self {
            ArtifactKind::Audio => recording_name.to_string(),
            ArtifactKind::Transcript => format!("Transcript_{}", recording_name),
            ArtifactKind::Summary => format!("Summary_{}", recording_name),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Audio => "audio",
            ArtifactKind::Transcript => "transcript",
            ArtifactKind::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// Format an artifact is requested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Raw recorded audio
    Mp3,
    Txt,
    Pdf,
    Docx,
    /// Subtitles, transcripts only
    Srt,
}

impl ArtifactFormat {
    /// File extension written to disk (also the wire name of the format)
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Mp3 => "mp3",
            ArtifactFormat::Txt => "txt",
            ArtifactFormat::Pdf => "pdf",
            ArtifactFormat::Docx => "docx",
            ArtifactFormat::Srt => "srt",
        }
    }

    pub fn is_valid_for(self, kind: ArtifactKind) -> bool {
        kind.formats().contains(&self)
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

/// One artifact to retrieve for one recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub recording_id: String,
    pub kind: ArtifactKind,
    pub format: ArtifactFormat,
}

impl ArtifactRequest {
    /// Build a request, rejecting format/kind pairs that do not exist (e.g. an SRT summary)
    pub fn new(
        recording_id: impl Into<String>,
        kind: ArtifactKind,
        format: ArtifactFormat,
    ) -> Option<Self> {
        format.is_valid_for(kind).then(|| Self {
            recording_id: recording_id.into(),
            kind,
            format,
        })
    }
}

impl fmt::Display for ArtifactRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} of {}", self.kind, self.format, self.recording_id)
    }
}

/// Transfer-encoded (base64) artifact content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPayload {
    pub format: ArtifactFormat,
    pub content: String,
}
