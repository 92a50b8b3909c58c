const COMMANDS: &[&str] = &[
    "configure_ambient_audio",
    "reset_audio_session",
    "get_ambient_audio_attributes",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
