//! Request and response shapes of the Gamma public API.
//!
//! Field names are camelCase on the wire. Optional fields are skipped when
//! absent so request bodies never carry explicit nulls.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Enumerations
// ============================================================================

/// How the input text is treated by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    Generate,
    Condense,
    Preserve,
}

/// Kind of artifact to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Presentation,
    Document,
    Webpage,
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardSplit {
    Auto,
    InputTextBreaks,
}

/// Additional file export produced next to the gamma URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Pptx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAmount {
    Brief,
    Medium,
    Detailed,
    Extensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSource {
    AiGenerated,
    Pictographic,
    Unsplash,
    WebAllImages,
    WebFreeToUse,
    WebFreeToUseCommercially,
    Giphy,
    Placeholder,
    NoImages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardDimensions {
    #[serde(rename = "fluid")]
    Fluid,
    #[serde(rename = "16x9")]
    Wide,
    #[serde(rename = "4x3")]
    Standard,
    #[serde(rename = "pageless")]
    Pageless,
    #[serde(rename = "letter")]
    Letter,
    #[serde(rename = "a4")]
    A4,
    #[serde(rename = "1x1")]
    Square,
    #[serde(rename = "4x5")]
    Portrait,
    #[serde(rename = "9x16")]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderFooterKind {
    CardNumber,
    Image,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageOrigin {
    ThemeLogo,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Sm,
    Md,
    Lg,
    Xl,
}

/// Access level granted to workspace members or email recipients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessLevel {
    NoAccess,
    View,
    Comment,
    Edit,
    FullAccess,
}

// ============================================================================
// Nested option groups
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<TextAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ImageSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Template generations only accept the model and style of images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateImageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One slot of a card header or footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFooterElement {
    #[serde(rename = "type")]
    pub kind: HeaderFooterKind,
    /// Text shown when `kind` is `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ImageOrigin>,
    /// Image URL when `source` is `custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFooter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left: Option<HeaderFooterElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_center: Option<HeaderFooterElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right: Option<HeaderFooterElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<HeaderFooterElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_center: Option<HeaderFooterElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<HeaderFooterElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_from_first_card: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_from_last_card: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<CardDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_footer: Option<HeaderFooter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_access: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_access: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_options: Option<EmailOptions>,
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /generations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub input_text: String,
    pub text_mode: TextMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_cards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_split: Option<CardSplit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_as: Option<ExportFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_options: Option<TextOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_options: Option<ImageOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_options: Option<CardOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_options: Option<SharingOptions>,
}

impl GenerateRequest {
    pub fn new(input_text: impl Into<String>, text_mode: TextMode) -> Self {
        Self {
            input_text: input_text.into(),
            text_mode,
            format: None,
            theme_id: None,
            num_cards: None,
            card_split: None,
            additional_instructions: None,
            folder_ids: None,
            export_as: None,
            text_options: None,
            image_options: None,
            card_options: None,
            sharing_options: None,
        }
    }
}

/// Body of `POST /generations/from-template`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFromTemplateRequest {
    /// Id of the template gamma.
    pub gamma_id: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_as: Option<ExportFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_options: Option<TemplateImageOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_options: Option<SharingOptions>,
}

/// Filter shared by the theme and folder listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Opaque cursor returned as `nextCursor` by a previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl ListQuery {
    /// Query-string pairs in the order the API documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref query) = self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref after) = self.after {
            pairs.push(("after", after.clone()));
        }
        pairs
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Returned by both generation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub generation_id: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Option<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lifecycle state reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub deducted: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub remaining: Option<Option<Value>>,
}

/// Snapshot of one generation as currently known by the remote service.
///
/// Optional fields are `None` when absent and `Some(None)` when the API sent
/// an explicit `null`, so the snapshot re-serializes exactly as received.
/// Fields the API adds later are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStatus {
    pub generation_id: String,
    pub status: GenerationState,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub gamma_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub pptx_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub progress: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub error: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub credits: Option<Option<Credits>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub color_keywords: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tone_keywords: Option<Option<Vec<String>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Marks a field as present, keeping an explicit `null` as `Some(None)`.
///
/// Paired with `#[serde(default)]`, which leaves absent fields at `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    /// Always serialized, `null` on the last page.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_generate_request_has_no_nulls() {
        let request = GenerateRequest::new("Quarterly results", TextMode::Generate);
        let body = serde_json::to_value(&request).unwrap();

        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(body["inputText"], "Quarterly results");
        assert_eq!(body["textMode"], "generate");
    }

    #[test]
    fn test_nested_options_use_wire_names() {
        let mut request = GenerateRequest::new("Roadmap", TextMode::Condense);
        request.card_options = Some(CardOptions {
            dimensions: Some(CardDimensions::Wide),
            header_footer: Some(HeaderFooter {
                bottom_right: Some(HeaderFooterElement {
                    kind: HeaderFooterKind::CardNumber,
                    value: None,
                    source: None,
                    src: None,
                    size: None,
                }),
                hide_from_first_card: Some(true),
                ..Default::default()
            }),
        });
        request.image_options = Some(ImageOptions {
            source: Some(ImageSource::WebFreeToUseCommercially),
            ..Default::default()
        });

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["cardOptions"]["dimensions"], "16x9");
        assert_eq!(
            body["cardOptions"]["headerFooter"]["bottomRight"],
            json!({ "type": "cardNumber" })
        );
        assert_eq!(body["cardOptions"]["headerFooter"]["hideFromFirstCard"], true);
        assert_eq!(body["imageOptions"]["source"], "webFreeToUseCommercially");
    }

    #[test]
    fn test_list_query_pairs_pass_cursor_verbatim() {
        let query = ListQuery {
            query: None,
            limit: Some(2),
            after: Some("abc==/+".to_string()),
        };
        assert_eq!(
            query.to_pairs(),
            vec![("limit", "2".to_string()), ("after", "abc==/+".to_string())]
        );
        assert!(ListQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_status_keeps_unknown_state_and_fields() {
        let raw = json!({
            "generationId": "g-1",
            "status": "queued",
            "estimatedSeconds": 30
        });
        let status: GenerationStatus = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(status.status, GenerationState::Other("queued".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn test_completed_status_without_url_is_accepted() {
        let raw = json!({ "generationId": "g-2", "status": "completed" });
        let status: GenerationStatus = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(status.status, GenerationState::Completed);
        assert!(status.gamma_url.is_none());
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn test_status_keeps_explicit_nulls() {
        let raw = json!({
            "generationId": "g-3",
            "status": "completed",
            "gammaUrl": null,
            "error": null,
            "credits": { "deducted": 12, "remaining": null }
        });
        let status: GenerationStatus = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(status.gamma_url, Some(None));
        assert_eq!(status.pdf_url, None);
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn test_generate_response_keeps_null_warnings() {
        let raw = json!({ "generationId": "g-4", "warnings": null });
        let response: GenerateResponse = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(response.warnings, Some(None));
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
    }

    #[test]
    fn test_page_serializes_null_cursor() {
        let page: Page<Folder> = Page {
            data: Vec::new(),
            has_more: false,
            next_cursor: None,
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value, json!({ "data": [], "hasMore": false, "nextCursor": null }));
    }
}
