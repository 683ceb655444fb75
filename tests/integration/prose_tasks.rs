//! Verifiers that check writing against content heuristics

use super::helpers::{assert_fail, assert_pass, Workspace};
use taskgrade::error::FailureKind;
use taskgrade::tasks::TaskId;

#[test]
fn test_haiku_pass() {
    let ws = Workspace::new();
    ws.write(
        "results/haiku.txt",
        "Code flows like water\nSilicon minds awaken\nFuture unfolds now\n",
    );
    assert_eq!(
        ws.run(TaskId::Haiku).line(),
        "PASS: Haiku has 5-7-5 syllables and is about technology ('code')"
    );
}

#[test]
fn test_haiku_wrong_syllables() {
    let ws = Workspace::new();
    ws.write(
        "results/haiku.txt",
        "Code flows like water\nSilicon minds awaken\nFuture unfolds right now\n",
    );
    let line = assert_fail(&ws.run(TaskId::Haiku), FailureKind::ContentHeuristicFailure);
    assert_eq!(
        line,
        "FAIL: Line 3 must have 5 syllables, found 6: 'Future unfolds right now'"
    );
}

#[test]
fn test_haiku_not_about_technology() {
    let ws = Workspace::new();
    ws.write(
        "results/haiku.txt",
        "Old pond in moonlight\nFrog jumps into the water\nSound of the splash now\n",
    );
    let line = assert_fail(&ws.run(TaskId::Haiku), FailureKind::ContentHeuristicFailure);
    assert_eq!(line, "FAIL: Haiku does not appear to be about technology");
}

#[test]
fn test_haiku_two_lines() {
    let ws = Workspace::new();
    ws.write("results/haiku.txt", "Code flows like water\nSilicon minds awaken\n");
    let line = assert_fail(&ws.run(TaskId::Haiku), FailureKind::CountMismatch);
    assert_eq!(line, "FAIL: Expected 3 haiku lines, found 2");
}

#[test]
fn test_summary_pass() {
    let ws = Workspace::new();
    ws.write(
        "results/summary.txt",
        "AI will transform healthcare and education, but it raises serious privacy and ethical concerns.\n",
    );
    assert_eq!(
        ws.run(TaskId::Summary).line(),
        "PASS: One-sentence summary covers both benefits and challenges (14 words)"
    );
}

#[test]
fn test_summary_two_sentences() {
    let ws = Workspace::new();
    ws.write(
        "results/summary.txt",
        "AI will transform healthcare. It also raises privacy concerns for everyone involved.",
    );
    let line = assert_fail(&ws.run(TaskId::Summary), FailureKind::ContentHeuristicFailure);
    assert_eq!(line, "FAIL: Expected a single sentence, found 2 sentences");
}

#[test]
fn test_summary_too_long() {
    let ws = Workspace::new();
    let long = format!("{} concerns.", "AI helps ".repeat(25).trim_end());
    ws.write("results/summary.txt", &long);
    let line = assert_fail(&ws.run(TaskId::Summary), FailureKind::ContentHeuristicFailure);
    assert_eq!(
        line,
        "FAIL: Summary too long (51 words); it must be under 50 words"
    );
}

#[test]
fn test_summary_too_short() {
    let ws = Workspace::new();
    ws.write("results/summary.txt", "AI helps but has risks.");
    let line = assert_fail(&ws.run(TaskId::Summary), FailureKind::ContentHeuristicFailure);
    assert_eq!(
        line,
        "FAIL: Summary too short (5 words); it must be at least 8 words"
    );
}

#[test]
fn test_summary_without_period() {
    let ws = Workspace::new();
    ws.write(
        "results/summary.txt",
        "AI will transform healthcare and education but raises privacy concerns",
    );
    let line = assert_fail(&ws.run(TaskId::Summary), FailureKind::ContentHeuristicFailure);
    assert_eq!(line, "FAIL: Summary must end with a period");
}

#[test]
fn test_summary_without_challenge() {
    let ws = Workspace::new();
    ws.write(
        "results/summary.txt",
        "AI will transform healthcare and education for millions of people.",
    );
    let line = assert_fail(&ws.run(TaskId::Summary), FailureKind::ContentHeuristicFailure);
    assert_eq!(line, "FAIL: Summary does not mention any challenges");
}

fn point(n: usize) -> String {
    format!("point number {n} is a sufficiently long statement with many words")
}

fn pros_cons(pros: usize, cons: usize) -> String {
    let mut out = String::from("Pros:\n");
    for i in 1..=pros {
        out.push_str(&format!("- {}\n", point(i)));
    }
    out.push_str("\nCons:\n");
    for i in 1..=cons {
        out.push_str(&format!("- {}\n", point(pros + i)));
    }
    out
}

#[test]
fn test_pros_cons_pass() {
    let ws = Workspace::new();
    ws.write("results/pros_cons.txt", &pros_cons(5, 5));
    assert_eq!(
        ws.run(TaskId::ProsCons).line(),
        "PASS: 5 pros and 5 cons, each 10-30 words"
    );
}

#[test]
fn test_pros_cons_missing_pro() {
    let ws = Workspace::new();
    ws.write("results/pros_cons.txt", &pros_cons(4, 5));
    let line = assert_fail(&ws.run(TaskId::ProsCons), FailureKind::CountMismatch);
    assert_eq!(line, "FAIL: Expected 5 pros, found 4");
}

#[test]
fn test_pros_cons_short_point() {
    let ws = Workspace::new();
    let doc = pros_cons(5, 5).replace(&point(7), "too short");
    ws.write("results/pros_cons.txt", &doc);
    let line = assert_fail(&ws.run(TaskId::ProsCons), FailureKind::ContentHeuristicFailure);
    assert_eq!(line, "FAIL: Point 7 must be 10-30 words, found 2: 'too short'");
}

#[test]
fn test_pros_cons_without_cons() {
    let ws = Workspace::new();
    ws.write("results/pros_cons.txt", &pros_cons(5, 0));
    let line = assert_fail(&ws.run(TaskId::ProsCons), FailureKind::FormatMismatch);
    assert_eq!(
        line,
        "FAIL: Document does not match a 'Cons:' section with bullet points: none found"
    );
}

#[test]
fn test_os_version_matches_override() {
    let ws = Workspace::new();
    ws.write("taskgrade.toml", "host_platform = \"linux\"\n")
        .write("results/os_version.txt", "Linux 6.8.0-generic\n");
    assert_eq!(
        ws.run(TaskId::OsVersion).line(),
        "PASS: OS version correctly detected: Linux 6.8.0-generic"
    );
}

#[test]
fn test_os_version_darwin_aliases() {
    let ws = Workspace::new();
    ws.write("taskgrade.toml", "host_platform = \"darwin\"\n")
        .write("results/os_version.txt", "macOS 14.2 Sonoma\n");
    assert_pass(&ws.run(TaskId::OsVersion));
}

#[test]
fn test_os_version_wrong_os() {
    let ws = Workspace::new();
    ws.write("taskgrade.toml", "host_platform = \"linux\"\n")
        .write("results/os_version.txt", "Windows 11\n");
    let line = assert_fail(&ws.run(TaskId::OsVersion), FailureKind::ContentHeuristicFailure);
    assert_eq!(line, "FAIL: OS 'Windows 11' does not match actual OS 'linux'");
}

#[test]
fn test_os_version_not_an_os() {
    let ws = Workspace::new();
    ws.write("results/os_version.txt", "banana\n");
    let line = assert_fail(&ws.run(TaskId::OsVersion), FailureKind::ContentHeuristicFailure);
    assert_eq!(
        line,
        "FAIL: Content 'banana' does not appear to be an OS version"
    );
}

#[test]
fn test_os_version_unknown_host_has_no_aliases() {
    let ws = Workspace::new();
    ws.write("taskgrade.toml", "host_platform = \"freebsd\"\n")
        .write("results/os_version.txt", "linux\n");
    let line = assert_fail(&ws.run(TaskId::OsVersion), FailureKind::ContentHeuristicFailure);
    assert_eq!(line, "FAIL: OS 'linux' does not match actual OS 'freebsd'");
}
