//! Android audio session backend.
//!
//! Builds the native android.media.AudioAttributes object matching the
//! ambient descriptor (USAGE_ASSISTANCE_SONIFICATION +
//! CONTENT_TYPE_SONIFICATION) over JNI and holds it as a global reference
//! for the process lifetime. Playback tagged with this usage does not
//! request audio focus, so other audio keeps playing undisturbed.

use jni::objects::{GlobalRef, JValue};
use jni::JNIEnv;
use std::sync::OnceLock;

use super::{AudioAttributesDescriptor, AudioSessionBackend, AudioSessionError};

/// Global JVM reference for Android
static JAVA_VM: OnceLock<jni::JavaVM> = OnceLock::new();

/// Native AudioAttributes object, built once at setup
static NATIVE_ATTRIBUTES: OnceLock<GlobalRef> = OnceLock::new();

/// Initialize the JVM reference (called from Tauri's Android setup)
pub fn init_jvm(vm: jni::JavaVM) {
    let _ = JAVA_VM.set(vm);
}

/// Android audio session backend
pub struct AndroidAudioSession;

impl AndroidAudioSession {
    pub fn new() -> Self {
        Self
    }

    /// Get JNI environment
    fn get_env(&self) -> Result<jni::AttachGuard<'static>, AudioSessionError> {
        let vm = JAVA_VM.get().ok_or(AudioSessionError::HostUnavailable)?;

        vm.attach_current_thread()
            .map_err(|e| AudioSessionError::Platform(format!("Failed to attach to JVM: {}", e)))
    }

    /// Build android.media.AudioAttributes for the given descriptor
    fn build_attributes(
        &self,
        env: &mut JNIEnv<'_>,
        _attributes: &AudioAttributesDescriptor,
    ) -> Result<GlobalRef, AudioSessionError> {
        // The descriptor has a single classification, mapped to the two
        // platform constants read below.
        let usage = env
            .get_static_field(
                "android/media/AudioAttributes",
                "USAGE_ASSISTANCE_SONIFICATION",
                "I",
            )
            .map_err(|e| AudioSessionError::Platform(format!("Failed to get usage constant: {}", e)))?
            .i()
            .map_err(|e| AudioSessionError::Platform(format!("Failed to convert usage constant: {}", e)))?;

        let content_type = env
            .get_static_field(
                "android/media/AudioAttributes",
                "CONTENT_TYPE_SONIFICATION",
                "I",
            )
            .map_err(|e| AudioSessionError::Platform(format!("Failed to get content type constant: {}", e)))?
            .i()
            .map_err(|e| AudioSessionError::Platform(format!("Failed to convert content type constant: {}", e)))?;

        let builder = env
            .new_object("android/media/AudioAttributes$Builder", "()V", &[])
            .map_err(|e| AudioSessionError::Platform(format!("Failed to create AudioAttributes.Builder: {}", e)))?;

        let builder = env
            .call_method(
                builder,
                "setUsage",
                "(I)Landroid/media/AudioAttributes$Builder;",
                &[JValue::Int(usage)],
            )
            .map_err(|e| AudioSessionError::Platform(format!("Failed to set usage: {}", e)))?
            .l()
            .map_err(|e| AudioSessionError::Platform(format!("Failed to convert Builder: {}", e)))?;

        let builder = env
            .call_method(
                builder,
                "setContentType",
                "(I)Landroid/media/AudioAttributes$Builder;",
                &[JValue::Int(content_type)],
            )
            .map_err(|e| AudioSessionError::Platform(format!("Failed to set content type: {}", e)))?
            .l()
            .map_err(|e| AudioSessionError::Platform(format!("Failed to convert Builder: {}", e)))?;

        let attrs = env
            .call_method(builder, "build", "()Landroid/media/AudioAttributes;", &[])
            .map_err(|e| AudioSessionError::Platform(format!("Failed to build AudioAttributes: {}", e)))?
            .l()
            .map_err(|e| AudioSessionError::Platform(format!("Failed to convert AudioAttributes: {}", e)))?;

        env.new_global_ref(attrs)
            .map_err(|e| AudioSessionError::Platform(format!("Failed to create global ref: {}", e)))
    }
}

impl Default for AndroidAudioSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSessionBackend for AndroidAudioSession {
    fn bind(&self, attributes: &AudioAttributesDescriptor) -> Result<(), AudioSessionError> {
        if NATIVE_ATTRIBUTES.get().is_some() {
            return Ok(());
        }

        let mut env = self.get_env()?;
        let native = self.build_attributes(&mut env, attributes)?;
        let _ = NATIVE_ATTRIBUTES.set(native);

        tracing::debug!("Native AudioAttributes bound (assistance sonification)");
        Ok(())
    }

    fn is_bound(&self) -> bool {
        NATIVE_ATTRIBUTES.get().is_some()
    }
}

/// The native AudioAttributes global reference, for other in-process
/// components that issue their own playback calls over JNI
pub fn native_attributes() -> Option<&'static GlobalRef> {
    NATIVE_ATTRIBUTES.get()
}
