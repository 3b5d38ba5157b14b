use assert_cmd::Command;

#[allow(dead_code)]
pub const SAMPLE_DIARY: &str = "\
Entry: Year 1, Spring, day 1 08:00

Stats:
Strength 8 -> 9

Kills:
zombie x2

Woke up in an evac shelter.

- [ ] find water
- [x] find a crowbar

Entry: Year 1, Spring, day 2 09:30

Built a fire.

Entry: Year 1, Spring, day 3 12:00

Skills:
melee 0 -> 1
";

pub fn diarylog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diarylog").unwrap();
    cmd.env_remove("DIARYLOG_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
