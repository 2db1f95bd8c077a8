use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use flate2::write::GzEncoder;
use flate2::Compression;

fn workdir(name: &str) -> PathBuf
{
    let dir = std::env::temp_dir().join(format!("fa2seq_cli_{}_{}", std::process::id(), name));
    fs::create_dir_all(&dir).expect("create work dir");
    dir
}

fn fa2seq<S: AsRef<OsStr>>(args: &[S]) -> Output
{
    Command::new(env!("CARGO_BIN_EXE_fa2seq"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run fa2seq")
}

#[test]
fn test_prints_identifier_and_length()
{
    let dir = workdir("scenario");
    let input = dir.join("sample.fa");
    let output = dir.join("sample.seq");
    fs::write(&input, b">seq1\nACGT\nACGT\n>seq2\nTTTT\n").unwrap();

    let result = fa2seq(&[&input, &output]);
    assert!(result.status.success());
    assert_eq!(String::from_utf8_lossy(&result.stdout), "sample\t12\n");
    assert_eq!(fs::read(&output).unwrap(), b"ACGTACGTTTTT");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_first_dot_segment_is_identifier()
{
    let dir = workdir("dots");
    let input = dir.join("sample.fasta.txt");
    let output = dir.join("out");
    fs::write(&input, b">seq1\nAC\n\nGT\n").unwrap();

    let result = fa2seq(&[&input, &output]);
    assert_eq!(String::from_utf8_lossy(&result.stdout), "sample\t4\n");
    assert_eq!(fs::read(&output).unwrap(), b"ACGT");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_gzip_input()
{
    let dir = workdir("gzip");
    let input = dir.join("chr2.fa.gz");
    let output = dir.join("chr2.seq");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b">chr2 test\nNNNNACGT\nacgt\n").unwrap();
    fs::write(&input, encoder.finish().unwrap()).unwrap();

    let result = fa2seq(&[&input, &output]);
    assert!(result.status.success());
    assert_eq!(String::from_utf8_lossy(&result.stdout), "chr2\t12\n");
    assert_eq!(fs::read(&output).unwrap(), b"NNNNACGTacgt");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_arguments_print_usage()
{
    let dir = workdir("usage");
    let input = dir.join("sample.fa");
    let output = dir.join("sample.seq");
    let extra = dir.join("extra.seq");
    fs::write(&input, b">a\nAC\n").unwrap();

    for args in [vec![], vec![&input], vec![&input, &output, &extra]]
    {
        let result = fa2seq(args.as_slice());
        assert!(result.status.success());
        assert!(result.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&result.stderr);
        assert!(stderr.starts_with("Usage "), "unexpected stderr: {}", stderr);
        assert!(stderr.trim_end().ends_with("faName outputName"));
    }
    // only the input we wrote is there
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_input_fails()
{
    let dir = workdir("missing");
    let input = dir.join("absent.fa");
    let output = dir.join("absent.seq");

    let result = fa2seq(&[&input, &output]);
    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
    assert!(String::from_utf8_lossy(&result.stderr).contains("absent.fa"));
    assert!(!output.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name()
{
    use std::os::unix::ffi::OsStrExt;

    let dir = workdir("non_utf8");
    let input = dir.join(OsStr::from_bytes(b"s\xffmple.fa"));
    let output = dir.join(OsStr::from_bytes(b"s\xffmple.seq"));
    fs::write(&input, b">a\nACGT\n").unwrap();

    let result = fa2seq(&[&input, &output]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert_eq!(String::from_utf8_lossy(&result.stdout), "s\u{FFFD}mple\t4\n");
    assert_eq!(fs::read(&output).unwrap(), b"ACGT");

    fs::remove_dir_all(&dir).unwrap();
}
