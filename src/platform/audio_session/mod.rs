//! Cross-platform ambient audio session abstraction.
//!
//! Platform implementations:
//! - Desktop (macOS/Windows/Linux): no-op, desktop audio servers mix application streams
//! - Android: native AudioAttributes object built over JNI
//! - iOS: no-op, WebView playback already uses the mixing ambient category
//!
//! The descriptor itself is platform-neutral. Backends only decide whether a
//! matching native attributes object has to be constructed so that other
//! audio-emitting components can tag their playback with the same
//! non-interrupting classification.

use std::fmt;

use serde::Serialize;

/// Error type for audio session operations
#[derive(Debug)]
pub enum AudioSessionError {
    /// Platform audio subsystem handle could not be obtained
    HostUnavailable,
    /// Native call failure with message
    Platform(String),
    /// No native session object exists on this platform
    NotSupported,
}

impl fmt::Display for AudioSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostUnavailable => write!(f, "Platform audio subsystem unavailable"),
            Self::Platform(msg) => write!(f, "Platform audio error: {}", msg),
            Self::NotSupported => write!(f, "Native audio session not supported on this platform"),
        }
    }
}

impl std::error::Error for AudioSessionError {}

impl From<AudioSessionError> for String {
    fn from(err: AudioSessionError) -> Self {
        err.to_string()
    }
}

/// Audio usage classification for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudioUsage {
    /// Short notification-style sound that must not suspend or duck other audio
    AmbientSonification,
}

/// Content type of the emitted audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudioContentType {
    Sonification,
}

/// Immutable audio-attributes descriptor shared by all ambient cue playback.
///
/// Constructed once at plugin setup and handed out read-only for the rest of
/// the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAttributesDescriptor {
    pub usage: AudioUsage,
    pub content_type: AudioContentType,
}

impl AudioAttributesDescriptor {
    /// The non-interrupting classification used for transient sound cues
    pub fn ambient() -> Self {
        Self {
            usage: AudioUsage::AmbientSonification,
            content_type: AudioContentType::Sonification,
        }
    }
}

/// Trait for platform-specific audio session backends
pub trait AudioSessionBackend: Send + Sync {
    /// Construct the native attributes object matching the descriptor, if the
    /// platform has one. Called once during setup.
    fn bind(&self, attributes: &AudioAttributesDescriptor) -> Result<(), AudioSessionError>;

    /// Whether a native attributes object is currently held
    fn is_bound(&self) -> bool;
}

// Platform-specific implementations
#[cfg(not(any(target_os = "ios", target_os = "android")))]
mod desktop;

#[cfg(target_os = "android")]
mod android;

#[cfg(target_os = "ios")]
mod ios;

// Re-export the platform-specific implementation as `PlatformAudioSession`
#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub use desktop::DesktopAudioSession as PlatformAudioSession;

#[cfg(target_os = "android")]
pub use android::AndroidAudioSession as PlatformAudioSession;

#[cfg(target_os = "android")]
pub use android::{init_jvm, native_attributes};

#[cfg(target_os = "ios")]
pub use ios::IosAudioSession as PlatformAudioSession;

/// Check if a native audio session object is constructed on this platform
pub fn is_native_session_available() -> bool {
    cfg!(target_os = "android")
}

/// Holds the shared ambient descriptor and answers the host lifecycle calls.
///
/// Both public operations are deliberate no-ops: the usage classification
/// chosen at setup is sufficient by platform convention to keep transient
/// cues from interrupting other audio, and the platform manages the
/// audio-focus lifecycle for that classification on its own.
pub struct AudioSessionConfigurator {
    attributes: AudioAttributesDescriptor,
    backend: PlatformAudioSession,
}

impl AudioSessionConfigurator {
    /// Create the configurator and bind the native attributes object where
    /// the platform has one. A bind failure is logged and otherwise ignored:
    /// the descriptor is always fully populated regardless.
    pub fn new() -> Self {
        let attributes = AudioAttributesDescriptor::ambient();
        let backend = PlatformAudioSession::new();

        if let Err(e) = backend.bind(&attributes) {
            tracing::warn!("Failed to bind native audio attributes: {}", e);
        }

        Self { attributes, backend }
    }

    /// Apply the ambient classification. No platform call is needed; the
    /// classification bound at setup already provides the behavior.
    pub fn configure_ambient_audio(&self) -> Result<(), AudioSessionError> {
        Ok(())
    }

    /// Release the session. The platform handles the audio-focus lifecycle
    /// automatically for this classification, so nothing to undo.
    pub fn reset_audio_session(&self) -> Result<(), AudioSessionError> {
        Ok(())
    }

    /// The shared descriptor, for other in-process audio-emitting components
    pub fn ambient_attributes(&self) -> &AudioAttributesDescriptor {
        &self.attributes
    }

    /// Whether the platform backend holds a native attributes object
    pub fn is_native_session_bound(&self) -> bool {
        self.backend.is_bound()
    }
}

impl Default for AudioSessionConfigurator {
    fn default() -> Self {
        Self::new()
    }
}
