//! Command builders for the CLI.
//!
//! `tree` and `check` accept the same pattern and tagging flags; flags a command does not
//! use are accepted but hidden from `--help`.

use clap::Command;

use super::args::*;

/// Pattern input and tagging options shared by `tree` and `check`.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(replace_arg())
        .arg(max_depth_arg())
        .arg(no_group_prescan_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("retag")
        .about("Inspect and validate regular expression patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tree_command())
        .subcommand(check_command())
        .subcommand(categories_command())
}

/// Show the tagged tree of a pattern.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the tagged tree of a pattern")
        .override_usage(
            "\
  retag tree <PATTERN_FILE>
  retag tree -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  retag tree -p '(\d+)-\1'           # tree dump and status
  retag tree -p '$1-\n' --replace    # replacement text
  retag tree pattern.txt --json      # JSON output
  echo '[a-z]+' | retag tree -        # pattern from stdin"#,
        );

    with_pattern_args(cmd)
        .arg(json_arg())
        .arg(color_arg())
        .arg(strict_arg().hide(true))
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  retag check <PATTERN_FILE>
  retag check -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  retag check -p '[z-a]'             # fails: inverted range
  retag check -p '(a' --color never  # fails: unfinished group
  retag check -p '\9' --strict       # fails: unresolved backreference"#,
        );

    with_pattern_args(cmd)
        .arg(strict_arg())
        .arg(color_arg())
        .arg(json_arg().hide(true))
}

/// List the known Unicode category names.
pub fn categories_command() -> Command {
    Command::new("categories")
        .about("List Unicode categories accepted by \\p{...}")
        .arg(json_arg())
}
