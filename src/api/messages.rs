use serde::{Deserialize, Serialize};

/// A recording as listed by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub id: String,
    /// Display name (untrusted, used as the basis for folder and file names)
    #[serde(rename = "filename")]
    pub name: String,
    /// Start time in epoch milliseconds (UTC)
    pub start_time: i64,
    /// Tag ids in remote order; only the first one decides folder placement
    #[serde(rename = "filetag_id_list", default)]
    pub tag_ids: Vec<String>,
}

impl Recording {
    pub fn new(id: impl Into<String>, name: impl Into<String>, start_time: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_time,
            tag_ids: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_ids = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn first_tag(&self) -> Option<&str> {
        self.tag_ids.first().map(String::as_str)
    }
}

/// A user-defined classification label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Response to the access-token exchange
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Envelope returned by the recording listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordingListResponse {
    #[serde(default)]
    pub data_file_list: Vec<Recording>,
}

/// Envelope returned by the tag listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TagListResponse {
    #[serde(default)]
    pub data_filetag_list: Vec<Tag>,
}

/// Envelope returned by the transcript/summary export endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Base64-encoded document bytes
    #[serde(default)]
    pub data: Option<String>,
}

/// Body posted to the transcript/summary export endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRequest {
    pub file_id: String,
    pub format: String,
}
