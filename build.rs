// BlinkUp Plugin - Build Script
// Generates permission schema files for the Tauri capability system

const COMMANDS: &[&str] = &["invoke_blink_up", "abort_blink_up", "clear_blink_up_data"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();

    println!("cargo:rerun-if-changed=permissions/");
    println!("cargo:rerun-if-changed=build.rs");
}
