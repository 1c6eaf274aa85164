use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tokio::fs;

use crate::error::{Result, VouchError};

/// Base64-encoded audio ready to inline into a model request.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub mime_type: String,
    pub data: String,
}

/// Map a file extension to its `audio/*` MIME type.
///
/// Anything not in this table is rejected before network work starts;
/// format support beyond that is delegated to the model.
pub fn audio_mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_lowercase().as_str() {
        "mp3" | "mpeg" | "mpga" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" | "mp4" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "webm" | "weba" => "audio/webm",
        "aiff" | "aif" => "audio/aiff",
        "amr" => "audio/amr",
        "wma" => "audio/x-ms-wma",
        _ => return None,
    };
    Some(mime)
}

/// Read an audio file and encode it for the analysis request.
pub async fn load_audio_payload(path: &Path) -> Result<AudioPayload> {
    let mime_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(audio_mime_for_extension)
        .ok_or_else(|| VouchError::UnsupportedMedia {
            path: path.to_path_buf(),
        })?;

    let bytes = fs::read(path).await.map_err(|e| VouchError::AudioRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(AudioPayload {
        mime_type: mime_type.to_string(),
        data: BASE64.encode(&bytes),
    })
}
