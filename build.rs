const COMMANDS: &[&str] = &[
    "mount_view",
    "unmount_view",
    "report_mount_error",
    "get_props",
    "set_props",
    "pause_preview",
    "resume_preview",
    "take_picture",
    "record",
    "stop_recording",
    "get_available_ratios",
    "get_available_picture_sizes",
    "focus_on_point",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .ios_path("ios")
        .build();
}
