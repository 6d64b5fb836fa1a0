use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn command_find_forward() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("in.fa");
    std::fs::write(&infile, ">read1\nATGAAATAA\n")?;

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("find")
        .arg(&infile)
        .arg("--min-len")
        .arg("0")
        .arg("--forward-frames")
        .arg("1")
        .arg("--reverse-frames")
        .arg("0");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(">read1 [Orf: 0, 0, 6, 1, 0, 0]\nATGAAA\n"));

    Ok(())
}

#[test]
fn command_find_reverse() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("in.fa");
    // reverse complement of ATGAAATAA
    std::fs::write(&infile, ">minus1\nTTATTTCAT\n")?;

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("find")
        .arg(&infile)
        .arg("--min-len")
        .arg("0")
        .arg("--forward-frames")
        .arg("0")
        .arg("--reverse-frames")
        .arg("1");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(">minus1 [Orf: 0, 0, 6, 2, 0, 0]\nATGAAA\n"));

    Ok(())
}

#[test]
fn command_find_extend_end() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("in.fa");
    std::fs::write(&infile, ">read1\nATGTAAATGAAATAA\n")?;

    // the premature stop at codon two is scanned over
    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("find")
        .arg(&infile)
        .arg("--min-len")
        .arg("2")
        .arg("--extend-end")
        .arg("--forward-frames")
        .arg("1")
        .arg("--reverse-frames")
        .arg("0");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[Orf: 0, 0, 12, 1, 0, 0]"));

    Ok(())
}

#[test]
fn command_find_skips_invalid() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("in.fa");
    std::fs::write(&infile, ">bad\nAC\n>good\nATGAAATAA\n")?;

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("find")
        .arg(&infile)
        .arg("--min-len")
        .arg("0")
        .arg("--forward-frames")
        .arg("1")
        .arg("--reverse-frames")
        .arg("0");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(">good [Orf: 0, 0, 6, 1, 0, 0]"))
        .stderr(predicate::str::contains("bad: sequence shorter"));

    Ok(())
}

#[test]
fn command_find_then_tsv() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("in.fa");
    let orffile = tempdir.path().join("orf.fa");
    std::fs::write(&infile, ">read1\nATGAAATAA\n")?;

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("find")
        .arg(&infile)
        .arg("--min-len")
        .arg("0")
        .arg("--forward-frames")
        .arg("1")
        .arg("--reverse-frames")
        .arg("0")
        .arg("-o")
        .arg(&orffile);
    cmd.assert().success();

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("tsv").arg(&orffile);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#name\tid\tfrom\tto\tstrand"))
        .stdout(predicate::str::contains("read1\t0\t0\t6\t+\t0\t0\t6"));

    Ok(())
}

#[test]
fn command_tsv_malformed_header() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("plain.fa");
    std::fs::write(&infile, ">read1 length=9\nATGAAATAA\n")?;

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("tsv").arg(&infile);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not find Orf"));

    Ok(())
}

#[test]
fn command_rc() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("in.fa");
    std::fs::write(&infile, ">u1\nACGTU\n")?;

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("rc").arg(&infile);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(">RC_u1\nAACGT\n"));

    // reverse only, no complement
    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("rc").arg(&infile).arg("--reverse").arg("-c");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(">u1\nUTGCA\n"));

    Ok(())
}

#[test]
fn command_rc_invalid_byte() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let infile = tempdir.path().join("in.fa");
    std::fs::write(&infile, ">gapped\nAC-GT\n")?;

    let mut cmd = Command::cargo_bin("norf")?;
    cmd.arg("rc").arg(&infile);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot complement"));

    Ok(())
}
