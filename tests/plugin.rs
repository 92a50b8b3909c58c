//! Plugin lifecycle tests against a mock Tauri runtime.

use tauri::test::{mock_builder, mock_context, noop_assets, MockRuntime};
use tauri_plugin_ambient_audio::audio_session::{
    configure_ambient_audio, get_ambient_audio_attributes, reset_audio_session,
};
use tauri_plugin_ambient_audio::{
    AmbientAudioExt, AudioAttributesDescriptor, AudioContentType, AudioUsage,
};

fn mock_app() -> tauri::App<MockRuntime> {
    mock_builder()
        .plugin(tauri_plugin_ambient_audio::init())
        .build(mock_context(noop_assets()))
        .expect("failed to build mock app")
}

#[test]
fn setup_manages_configurator() {
    let app = mock_app();

    let attrs = *app.ambient_audio().ambient_attributes();
    assert_eq!(attrs.usage, AudioUsage::AmbientSonification);
    assert_eq!(attrs.content_type, AudioContentType::Sonification);
}

#[test]
fn configure_then_reset_then_read() {
    let app = mock_app();

    let ack = tauri::async_runtime::block_on(configure_ambient_audio(app.ambient_audio()))
        .expect("configure should succeed");
    assert!(ack.success);

    let ack = tauri::async_runtime::block_on(reset_audio_session(app.ambient_audio()))
        .expect("reset should succeed");
    assert!(ack.success);

    let attrs = tauri::async_runtime::block_on(get_ambient_audio_attributes(app.ambient_audio()))
        .expect("accessor should succeed");
    assert_eq!(attrs, AudioAttributesDescriptor::ambient());
}

#[test]
fn repeated_and_interleaved_calls_are_stable() {
    let app = mock_app();

    for _ in 0..5 {
        let ack = tauri::async_runtime::block_on(configure_ambient_audio(app.ambient_audio()))
            .unwrap();
        assert!(ack.success);

        let ack =
            tauri::async_runtime::block_on(reset_audio_session(app.ambient_audio())).unwrap();
        assert!(ack.success);

        let attrs =
            tauri::async_runtime::block_on(get_ambient_audio_attributes(app.ambient_audio()))
                .unwrap();
        assert_eq!(attrs, AudioAttributesDescriptor::ambient());
    }
}

#[test]
fn descriptor_wire_shape() {
    let app = mock_app();

    let attrs =
        tauri::async_runtime::block_on(get_ambient_audio_attributes(app.ambient_audio())).unwrap();
    let json = serde_json::to_value(attrs).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "usage": "ambient-sonification",
            "contentType": "sonification"
        })
    );
}
