use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_tritone(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tritone"))
        .args(args)
        .output()
        .expect("Failed to execute tritone")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_encode_then_decode() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("sky.wav");

    let encoded = run_tritone(&["encode", path_str(&wav), "--text", "Sky"]);
    assert!(encoded.status.success(), "Encode failed: {:?}", encoded);
    assert!(stdout(&encoded).contains("Encoded 3 symbols to 960 audio samples"));

    // 44-byte header plus 960 16-bit samples
    assert_eq!(fs::metadata(&wav).unwrap().len(), 44 + 960 * 2);

    let decoded = run_tritone(&["decode", path_str(&wav)]);
    assert!(decoded.status.success(), "Decode failed: {:?}", decoded);
    let text = stdout(&decoded);
    assert!(text.contains("Decoded (spectral): Sky"), "Got: {}", text);
    assert!(text.contains("Decoded (filter bank): Sky"), "Got: {}", text);
}

#[test]
fn test_decode_single_method() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("hi.wav");
    run_tritone(&["encode", path_str(&wav), "-t", "Hi there"]);

    let decoded = run_tritone(&["decode", path_str(&wav), "--method", "filter-bank"]);
    let text = stdout(&decoded);
    assert!(text.contains("Decoded (filter bank): Hi there"), "Got: {}", text);
    assert!(!text.contains("spectral"));
}

#[test]
fn test_encode_from_file_strips_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("message.txt");
    let wav = dir.path().join("message.wav");
    fs::write(&input, "Hello, World!\n").unwrap();

    let encoded = run_tritone(&["encode", path_str(&wav), "--input-file", path_str(&input)]);
    assert!(encoded.status.success(), "Encode failed: {:?}", encoded);

    let decoded = run_tritone(&["decode", path_str(&wav), "-m", "spectral"]);
    assert!(stdout(&decoded).contains("Decoded (spectral): Hello World"));
}

#[test]
fn test_encode_rejects_bad_amplitude() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("bad.wav");
    let output = run_tritone(&["encode", path_str(&wav), "-t", "abc", "--amplitude", "0"]);
    assert!(!output.status.success());
    assert!(!wav.exists());
}

#[test]
fn test_encode_requires_text() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("none.wav");
    let output = run_tritone(&["encode", path_str(&wav)]);
    assert!(!output.status.success());
}

#[test]
fn test_decode_rejects_wrong_sample_rate() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("fast.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&wav, spec).unwrap();
    for _ in 0..640 {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();

    let output = run_tritone(&["decode", path_str(&wav)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("16000"), "Got: {}", stderr);
}

#[test]
fn test_inspect_reports_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("ab.wav");
    run_tritone(&["encode", path_str(&wav), "-t", "aB"]);

    let output = run_tritone(&["inspect", path_str(&wav)]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Block 0:"));
    assert!(text.contains("Block 1:"));
    assert!(!text.contains("Block 2:"));
    assert!(text.contains("Decoded: spectral 'a', filter bank 'a'"), "Got: {}", text);
    assert!(text.contains("Decoded: spectral 'B', filter bank 'B'"), "Got: {}", text);
}
