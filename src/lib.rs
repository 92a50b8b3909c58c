//! Non-interrupting ambient audio session classification for Tauri apps.
//!
//! Short notification-style cues (chimes, ticks, completion sounds) should
//! play without suspending or ducking whatever the user already has playing.
//! This plugin binds the assistance-sonification classification once at
//! setup and answers the host shell's lifecycle calls; the platform's own
//! focus handling does the rest, so both calls are acknowledged no-ops.

pub mod audio_session;
pub mod platform;

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime, State,
};

pub use platform::audio_session::{
    is_native_session_available, AudioAttributesDescriptor, AudioContentType,
    AudioSessionConfigurator, AudioSessionError, AudioUsage,
};

/// Access to the managed audio session configurator from any `Manager` handle
pub trait AmbientAudioExt<R: Runtime> {
    fn ambient_audio(&self) -> State<'_, AudioSessionConfigurator>;
}

impl<R: Runtime, T: Manager<R>> AmbientAudioExt<R> for T {
    fn ambient_audio(&self) -> State<'_, AudioSessionConfigurator> {
        self.state::<AudioSessionConfigurator>()
    }
}

/// Initializes the plugin. The configurator is constructed exactly once
/// here, before any command can be dispatched.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("ambient-audio")
        .setup(|app, _api| {
            app.manage(AudioSessionConfigurator::new());
            tracing::debug!("Ambient audio session initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            audio_session::configure_ambient_audio,
            audio_session::reset_audio_session,
            audio_session::get_ambient_audio_attributes,
        ])
        .build()
}
