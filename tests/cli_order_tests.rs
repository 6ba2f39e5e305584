//! End-to-end tests for `bbqp order`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_order_default_message() {
    let output = bbqp_command(&["order"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Order should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.trim_end().lines().collect();

    // One line per category plus the total line
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("- Body material: "));
    assert_eq!(lines[7], "Estimated price: 25000 ₽");
}

#[test]
fn test_order_engraving_without_file_has_no_attachment_line() {
    let output = bbqp_command(&["order", "-s", "style=engraving"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Custom engraving"));
    assert!(!stdout.contains("Engraving artwork"));
    assert_eq!(stdout.trim_end().lines().count(), 8);
}

#[test]
fn test_order_engraving_with_file_appends_attachment_line() {
    let output = bbqp_command(&[
        "order",
        "-s",
        "style=engraving",
        "--engraving-file",
        "logo.png",
    ])
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.trim_end().lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[8],
        "Engraving artwork: logo.png (file sent separately in chat)"
    );
}

#[test]
fn test_order_attachment_inert_without_engraving_style() {
    let output = bbqp_command(&["order", "--engraving-file", "logo.png"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("logo.png"));
    assert_eq!(stdout.trim_end().lines().count(), 8);
}

#[test]
fn test_order_link_uses_configured_contact() {
    let config_dir = temp_config_dir();

    let output = isolated_command(&["order", "--link"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("https://t.me/thetaranov?text="));
    assert!(stdout.contains("%0A"));
}

#[test]
fn test_order_link_reflects_contact_override() {
    let config_dir = temp_config_dir();

    let set = isolated_command(
        &["config", "set", "--contact-url", "https://t.me/otherperson"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    let output = isolated_command(&["order", "--link"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("https://t.me/otherperson?text="));
}

#[test]
fn test_order_export_to_explicit_file() {
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("order.txt");

    let output = isolated_command(
        &[
            "order",
            "-s",
            "material=stainless",
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Exported order message to:"));

    let contents = fs::read_to_string(&out_path).expect("Exported file should exist");
    assert!(contents.contains("- Body material: Stainless steel (3mm)"));
    assert!(contents.contains("Estimated price: 45000 ₽"));
}

#[test]
fn test_order_export_default_path_in_config_dir() {
    let config_dir = temp_config_dir();

    let output = isolated_command(&["order", "--output"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Default export dir is <config dir>/orders with a dated file name
    let orders_dir = config_dir.path().join("orders");
    let entries: Vec<_> = fs::read_dir(&orders_dir)
        .expect("orders dir should exist")
        .collect();
    assert_eq!(entries.len(), 1);

    let file_name = entries[0].as_ref().unwrap().file_name();
    let file_name = file_name.to_string_lossy();
    assert!(file_name.starts_with("bbqp_order_"));
    assert!(file_name.ends_with(".txt"));
}

#[test]
fn test_order_rejects_invalid_selection() {
    let output = bbqp_command(&["order", "-s", "style=chrome"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid selection"));
}
