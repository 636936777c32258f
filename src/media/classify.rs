//! Media kind classification.
//!
//! Classification runs an ordered chain of independent rules; the first rule
//! that recognises the attachment decides its kind:
//!
//! 1. `sticker_rule`: name/path mentions "sticker", or message type 20
//! 2. `mime_family_rule`: top-level MIME family
//! 3. `legacy_type_rule`: numeric message type codes of old archives
//!
//! Anything left over is `MediaKind::Unknown`.
//!
//! CHANGELOG:
//! - 02/14/2026 - Split into rule chain, configurable labels
//! - 02/11/2026 - Initial implementation

use serde::{Deserialize, Serialize};

use crate::models::MediaKind;

/// Message type code used for stickers.
pub const STICKER_MESSAGE_TYPE: i64 = 20;

/// Legacy message type codes that imply an attachment.
pub const LEGACY_IMAGE_TYPE: i64 = 1;
pub const LEGACY_AUDIO_TYPE: i64 = 2;
pub const LEGACY_VIDEO_TYPE: i64 = 3;

/// Inputs the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct MediaFacts<'a> {
    pub mime: &'a str,
    pub file_name: Option<&'a str>,
    pub file_path: Option<&'a str>,
    pub message_type: Option<i64>,
}

/// Result of classification. `mime` echoes the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaClassification {
    pub kind: MediaKind,
    pub label: String,
    pub mime: String,
}

/// Built-in label presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLocale {
    #[default]
    En,
    Pt,
}

/// Display label for each media kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLabels {
    pub image: String,
    pub video: String,
    pub audio: String,
    pub document: String,
    pub sticker: String,
    pub unknown: String,
}

impl MediaLabels {
    pub fn english() -> Self {
        Self {
            image: "Image".into(),
            video: "Video".into(),
            audio: "Audio".into(),
            document: "Document".into(),
            sticker: "Sticker".into(),
            unknown: "Unknown".into(),
        }
    }

    pub fn portuguese() -> Self {
        Self {
            image: "Imagem".into(),
            video: "Vídeo".into(),
            audio: "Áudio".into(),
            document: "Documento".into(),
            sticker: "Sticker".into(),
            unknown: "Desconhecido".into(),
        }
    }

    pub fn for_locale(locale: LabelLocale) -> Self {
        match locale {
            LabelLocale::En => Self::english(),
            LabelLocale::Pt => Self::portuguese(),
        }
    }

    pub fn label(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Image => &self.image,
            MediaKind::Video => &self.video,
            MediaKind::Audio => &self.audio,
            MediaKind::Document => &self.document,
            MediaKind::Sticker => &self.sticker,
            MediaKind::Unknown => &self.unknown,
        }
    }
}

impl Default for MediaLabels {
    fn default() -> Self {
        Self::english()
    }
}

type MediaRule = fn(&MediaFacts<'_>) -> Option<MediaKind>;

const RULES: &[MediaRule] = &[sticker_rule, mime_family_rule, legacy_type_rule];

/// Classify an attachment. Total: always returns one of the six kinds.
pub fn classify(facts: &MediaFacts<'_>, labels: &MediaLabels) -> MediaClassification {
    let kind = RULES
        .iter()
        .find_map(|rule| rule(facts))
        .unwrap_or(MediaKind::Unknown);

    MediaClassification {
        kind,
        label: labels.label(kind).to_string(),
        mime: facts.mime.to_string(),
    }
}

/// Stickers are recognised by name before anything else, since they are
/// usually stored as `image/webp`.
pub fn sticker_rule(facts: &MediaFacts<'_>) -> Option<MediaKind> {
    let name_or_path = format!(
        "{} {}",
        facts.file_name.unwrap_or(""),
        facts.file_path.unwrap_or("")
    )
    .to_lowercase();

    if name_or_path.contains("sticker") || facts.message_type == Some(STICKER_MESSAGE_TYPE) {
        Some(MediaKind::Sticker)
    } else {
        None
    }
}

pub fn mime_family_rule(facts: &MediaFacts<'_>) -> Option<MediaKind> {
    let mime = facts.mime.to_lowercase();
    if mime.starts_with("image/") {
        Some(MediaKind::Image)
    } else if mime.starts_with("video/") {
        Some(MediaKind::Video)
    } else if mime.starts_with("audio/") {
        Some(MediaKind::Audio)
    } else if mime.starts_with("application/") || mime.starts_with("text/") {
        Some(MediaKind::Document)
    } else {
        None
    }
}

pub fn legacy_type_rule(facts: &MediaFacts<'_>) -> Option<MediaKind> {
    match facts.message_type? {
        LEGACY_IMAGE_TYPE => Some(MediaKind::Image),
        LEGACY_AUDIO_TYPE => Some(MediaKind::Audio),
        LEGACY_VIDEO_TYPE => Some(MediaKind::Video),
        _ => None,
    }
}

/// Whether a message type code alone implies an attachment.
pub fn is_legacy_media_type(message_type: Option<i64>) -> bool {
    matches!(
        message_type,
        Some(LEGACY_IMAGE_TYPE | LEGACY_AUDIO_TYPE | LEGACY_VIDEO_TYPE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::mime::UNKNOWN_MIME;

    fn facts<'a>(
        mime: &'a str,
        file_name: Option<&'a str>,
        file_path: Option<&'a str>,
        message_type: Option<i64>,
    ) -> MediaFacts<'a> {
        MediaFacts {
            mime,
            file_name,
            file_path,
            message_type,
        }
    }

    #[test]
    fn test_jpeg_is_image() {
        let result = classify(
            &facts("image/jpeg", Some("photo.jpg"), None, None),
            &MediaLabels::english(),
        );
        assert_eq!(
            result,
            MediaClassification {
                kind: MediaKind::Image,
                label: "Image".to_string(),
                mime: "image/jpeg".to_string(),
            }
        );
    }

    #[test]
    fn test_sticker_beats_mime() {
        let f = facts("image/webp", Some("STICKER-2024.webp"), None, None);
        assert_eq!(classify(&f, &MediaLabels::english()).kind, MediaKind::Sticker);

        let f = facts("image/webp", None, Some("Media/WhatsApp Stickers/a.webp"), None);
        assert_eq!(classify(&f, &MediaLabels::english()).kind, MediaKind::Sticker);

        let f = facts("image/webp", Some("a.webp"), None, Some(STICKER_MESSAGE_TYPE));
        assert_eq!(classify(&f, &MediaLabels::english()).kind, MediaKind::Sticker);
    }

    #[test]
    fn test_mime_families() {
        let labels = MediaLabels::english();
        let cases = [
            ("video/mp4", MediaKind::Video),
            ("AUDIO/OGG; codecs=opus", MediaKind::Audio),
            ("application/pdf", MediaKind::Document),
            ("text/vcard", MediaKind::Document),
        ];
        for (mime, kind) in cases {
            assert_eq!(classify(&facts(mime, None, None, None), &labels).kind, kind, "{}", mime);
        }
    }

    #[test]
    fn test_mime_takes_priority_over_legacy_code() {
        let f = facts("video/mp4", None, None, Some(LEGACY_IMAGE_TYPE));
        assert_eq!(mime_family_rule(&f), Some(MediaKind::Video));
        assert_eq!(classify(&f, &MediaLabels::english()).kind, MediaKind::Video);
    }

    #[test]
    fn test_legacy_codes() {
        let labels = MediaLabels::english();
        let kind_for = |code| classify(&facts(UNKNOWN_MIME, None, None, Some(code)), &labels).kind;
        assert_eq!(kind_for(1), MediaKind::Image);
        assert_eq!(kind_for(2), MediaKind::Audio);
        assert_eq!(kind_for(3), MediaKind::Video);
        assert_eq!(kind_for(9), MediaKind::Unknown);
    }

    #[test]
    fn test_unknown_is_terminal() {
        let result = classify(&facts("", None, None, None), &MediaLabels::english());
        assert_eq!(result.kind, MediaKind::Unknown);
        assert_eq!(result.label, "Unknown");
        assert_eq!(result.mime, "");
    }

    #[test]
    fn test_mime_echoed_unchanged() {
        let result = classify(&facts("Image/PNG", None, None, None), &MediaLabels::english());
        assert_eq!(result.kind, MediaKind::Image);
        assert_eq!(result.mime, "Image/PNG");
    }

    #[test]
    fn test_portuguese_labels() {
        let labels = MediaLabels::portuguese();
        let audio = classify(&facts(UNKNOWN_MIME, None, None, Some(2)), &labels);
        assert_eq!(audio.label, "Áudio");
        assert_eq!(labels.label(MediaKind::Unknown), "Desconhecido");
        assert_eq!(MediaLabels::for_locale(LabelLocale::Pt), labels);
    }

    #[test]
    fn test_is_legacy_media_type() {
        assert!(is_legacy_media_type(Some(1)));
        assert!(is_legacy_media_type(Some(3)));
        assert!(!is_legacy_media_type(Some(0)));
        assert!(!is_legacy_media_type(Some(20)));
        assert!(!is_legacy_media_type(None));
    }
}
