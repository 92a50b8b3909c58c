//! Platform abstraction layer for cross-platform functionality.
//!
//! Audio session: native attributes binding on Android, no-op backends on
//! desktop and iOS where the platform mixes application audio by default.

pub mod audio_session;

pub use audio_session::{
    is_native_session_available, AudioAttributesDescriptor, AudioContentType,
    AudioSessionBackend, AudioSessionConfigurator, AudioSessionError, AudioUsage,
};

pub use audio_session::PlatformAudioSession;
