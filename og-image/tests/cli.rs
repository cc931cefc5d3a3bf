use std::process::Command;

#[test]
fn test_writes_public_og_image() {
    let output = Command::new(env!("CARGO_BIN_EXE_og-image"))
        .output()
        .expect("run og-image");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.trim_end();
    assert_eq!(stdout.lines().count(), 1);
    assert!(line.starts_with("Wrote /"), "unexpected stdout: {line}");
    assert!(line.ends_with("/public/og-image.png"), "unexpected stdout: {line}");

    let path = line.trim_start_matches("Wrote ");
    let image = image::open(path).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 630));
}
