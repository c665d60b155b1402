use assert_cmd::Command;

fn exprtree() -> Command {
    Command::cargo_bin("exprtree").unwrap()
}

#[test]
fn prints_value() {
    exprtree().arg("(10+2)-(22-99)")
              .assert()
              .success()
              .stdout("89\n");
}

#[test]
fn renders_with_every_strategy() {
    for strategy in ["classic", "lookup", "switch", "generic"] {
        exprtree().args(["--render", "--strategy", strategy, "(10+2)-(22-99)"])
                  .assert()
                  .success()
                  .stdout("((10 + 2) - (22 - 99))\n");
    }
}

#[test]
fn reports_parse_errors() {
    exprtree().arg("(1+2")
              .assert()
              .failure()
              .stderr("Error at offset 0: Parenthesis has no matching partner.\n");
}

#[test]
fn first_closing_flag_changes_matching() {
    exprtree().arg("((1+2)-3)").assert().success().stdout("0\n");
    exprtree().args(["--first-closing", "((1+2)-3)"])
              .assert()
              .failure();
}

#[test]
fn diagnostics_go_to_stderr() {
    exprtree().args(["--tokens", "--inorder", "12+345"])
              .assert()
              .success()
              .stdout("357\n")
              .stderr("[Integer\"12\", Plus, Integer\"345\"]\n12 + 345\n");
}

#[test]
fn missing_file_fails() {
    exprtree().args(["--file", "does/not/exist.txt"])
              .assert()
              .failure();
}

#[test]
fn deep_nesting_fails_cleanly() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    exprtree().arg(source)
              .assert()
              .failure()
              .code(1)
              .stderr("Error at offset 256: Parentheses are nested more than 256 levels deep.\n");
}
