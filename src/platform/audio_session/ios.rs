//! iOS audio session backend.
//!
//! WebView audio on iOS plays under the ambient AVAudioSession category,
//! which mixes with other audio by default. No native object is constructed
//! and binding is a no-op.

use super::{AudioAttributesDescriptor, AudioSessionBackend, AudioSessionError};

/// iOS no-op backend
pub struct IosAudioSession;

impl IosAudioSession {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IosAudioSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSessionBackend for IosAudioSession {
    fn bind(&self, _attributes: &AudioAttributesDescriptor) -> Result<(), AudioSessionError> {
        Ok(())
    }

    fn is_bound(&self) -> bool {
        false
    }
}
