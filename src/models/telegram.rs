use serde::{Deserialize, Serialize};

/// One entry of the `media` descriptor array sent with sendMediaGroup.
/// Files themselves travel as multipart parts; each descriptor points at its
/// part via the `attach://` scheme.
#[derive(Debug, Clone, Serialize)]
pub struct InputMediaPhoto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub media: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

impl InputMediaPhoto {
    pub fn new(attach_key: &str, caption: impl Into<String>) -> Self {
        InputMediaPhoto {
            kind: "photo",
            media: format!("attach://{}", attach_key),
            caption: caption.into(),
        }
    }
}

/// Builds the descriptor array for a grouped upload: one entry per file,
/// caption only on the first.
pub fn media_group_descriptors(count: usize, caption: &str) -> Vec<InputMediaPhoto> {
    (0..count)
        .map(|i| {
            let caption = if i == 0 { caption } else { "" };
            InputMediaPhoto::new(&format!("photo{}", i), caption)
        })
        .collect()
}

/// Minimal Bot API reply envelope; `ok=false` means the provider rejected
/// the call even though HTTP succeeded.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReply {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_serializes_attach_scheme() {
        let photo = InputMediaPhoto::new("photo0", "caption");
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(
            json,
            r#"{"type":"photo","media":"attach://photo0","caption":"caption"}"#
        );
    }

    #[test]
    fn test_caption_only_on_first_descriptor() {
        let media = media_group_descriptors(3, "review me");
        assert_eq!(media.len(), 3);
        assert_eq!(media[0].caption, "review me");
        assert_eq!(media[1].caption, "");
        assert_eq!(media[2].media, "attach://photo2");

        // Empty captions are omitted from the wire payload entirely.
        let json = serde_json::to_string(&media[1]).unwrap();
        assert!(!json.contains("caption"));
    }

    #[test]
    fn test_reply_envelope() {
        let reply: ApiReply =
            serde_json::from_str(r#"{"ok":false,"description":"chat not found"}"#).unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.description.as_deref(), Some("chat not found"));
    }
}
