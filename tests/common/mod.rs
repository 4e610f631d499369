use assert_cmd::Command;

pub fn contactbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("contactbook").unwrap();
    cmd.env_remove("CONTACTBOOK_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}
