//! Desktop audio session backend.
//!
//! Desktop audio servers (CoreAudio, WASAPI, PulseAudio/PipeWire) mix
//! application streams freely; there is no focus negotiation to opt out of,
//! so no native attributes object exists and binding is a no-op.

use super::{AudioAttributesDescriptor, AudioSessionBackend, AudioSessionError};

/// Desktop no-op backend
pub struct DesktopAudioSession;

impl DesktopAudioSession {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopAudioSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSessionBackend for DesktopAudioSession {
    fn bind(&self, _attributes: &AudioAttributesDescriptor) -> Result<(), AudioSessionError> {
        Ok(())
    }

    fn is_bound(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_bind_is_noop() {
        let backend = DesktopAudioSession::new();
        assert!(backend.bind(&AudioAttributesDescriptor::ambient()).is_ok());
        assert!(!backend.is_bound());
    }
}
