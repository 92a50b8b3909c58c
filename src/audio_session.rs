//! Ambient audio session commands.
//!
//! Both lifecycle commands acknowledge success without touching the
//! platform: the assistance-sonification classification bound at setup is
//! what keeps transient cues from interrupting other audio, and the platform
//! manages focus for that classification on its own. Any internal fault is
//! caught here and reported as a failure string, never propagated raw
//! across the bridge.

use tauri::State;

use crate::platform::audio_session::{AudioAttributesDescriptor, AudioSessionConfigurator};

/// Acknowledgment returned by the lifecycle commands
#[derive(Clone, serde::Serialize)]
pub struct Ack {
    pub success: bool,
}

/// Classify sound-effect playback as non-interrupting ambient audio
#[tauri::command]
pub async fn configure_ambient_audio(
    session: State<'_, AudioSessionConfigurator>,
) -> Result<Ack, String> {
    session
        .configure_ambient_audio()
        .map_err(|e| format!("Failed to configure ambient audio: {}", e))?;

    tracing::debug!("Ambient audio session configured");
    Ok(Ack { success: true })
}

/// Release the audio session
#[tauri::command]
pub async fn reset_audio_session(
    session: State<'_, AudioSessionConfigurator>,
) -> Result<Ack, String> {
    session
        .reset_audio_session()
        .map_err(|e| format!("Failed to reset audio session: {}", e))?;

    tracing::debug!("Audio session reset");
    Ok(Ack { success: true })
}

/// The shared ambient attributes descriptor
#[tauri::command]
pub async fn get_ambient_audio_attributes(
    session: State<'_, AudioSessionConfigurator>,
) -> Result<AudioAttributesDescriptor, String> {
    Ok(*session.ambient_attributes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_wire_shape() {
        let json = serde_json::to_value(Ack { success: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_failure_prefixes() {
        use crate::platform::audio_session::AudioSessionError;

        // The bridge contract: a fault surfaces with the fixed prefix and
        // the fault's own message text.
        let err = AudioSessionError::Platform("boom".to_string());
        let msg = format!("Failed to configure ambient audio: {}", err);
        assert_eq!(msg, "Failed to configure ambient audio: Platform audio error: boom");
    }
}
