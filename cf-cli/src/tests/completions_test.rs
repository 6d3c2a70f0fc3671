use clap::CommandFactory;
use clap_complete::Shell;

use super::*;
use crate::CfCommandRoot;
use crate::completions::*;

#[rstest]
#[case::bash(Shell::Bash, "_crdform()")]
#[case::zsh(Shell::Zsh, "#compdef crdform")]
#[case::fish(Shell::Fish, "complete -c crdform")]
fn test_completions_stdout(#[case] shell: Shell, #[case] expected: &str) {
    let args = Args { shell, dir: None };
    let (res, out) = output_of(|buf| cmd(&args, CfCommandRoot::command(), buf));
    assert_ok!(res);
    assert_contains!(out, expected);
    assert_contains!(out, "descriptor-schema");
}

#[rstest]
fn test_completions_dir() {
    let dir = assert_fs::TempDir::new().unwrap();
    let target = dir.path().join("zsh/site-functions");

    let args = Args { shell: Shell::Zsh, dir: Some(target.clone()) };
    let (res, out) = output_of(|buf| cmd(&args, CfCommandRoot::command(), buf));
    assert_ok!(res);

    let script = target.join("_crdform");
    assert!(script.exists());
    assert_eq!(out, format!("zsh completions written to {}\n", script.display()));
}
