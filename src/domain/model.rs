use serde::{Deserialize, Serialize};

/// One row of extracted data, corresponding to one person in the source list.
///
/// The field set is fixed and known in advance; any field may be absent in the
/// service response. Values are opaque text, typically Bengali.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    // Area metadata, repeated on every record by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upazila: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#union: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_area_code: Option<String>,
}

impl Voter {
    /// Every text field of the record, in declaration order. The replacement
    /// engine rewrites values through this view; fields are never added or
    /// removed.
    pub fn text_fields_mut(&mut self) -> [&mut Option<String>; 14] {
        [
            &mut self.serial_no,
            &mut self.name,
            &mut self.voter_id,
            &mut self.father_name,
            &mut self.mother_name,
            &mut self.occupation,
            &mut self.date_of_birth,
            &mut self.address,
            &mut self.district,
            &mut self.upazila,
            &mut self.r#union,
            &mut self.ward_number,
            &mut self.voter_area,
            &mut self.voter_area_code,
        ]
    }
}

/// Envelope returned by the extraction service for one submission.
///
/// `total_voters` is informational only; the transform step carries it over
/// verbatim and never re-derives it from `data.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub job_id: String,
    pub status: String,
    pub total_voters: u64,
    pub data: Vec<Voter>,
}

/// A literal find/replace instruction applied across all text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub find: String,
    pub replace: String,
}

impl ReplacementRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// A rule with an empty needle is inert: it never matches and must not
    /// expand into a replace-at-every-position.
    pub fn is_active(&self) -> bool {
        !self.find.is_empty()
    }
}

/// Administrative-area descriptors attached to an upload. All free text;
/// empty strings are allowed and passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadMetadata {
    pub district: String,
    pub upazila: String,
    pub r#union: String,
    pub ward_number: String,
    pub voter_area: String,
    pub voter_area_code: String,
}
