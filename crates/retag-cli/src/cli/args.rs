//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern file, or `-` for stdin (positional).
pub fn pattern_path_arg() -> Arg {
    Arg::new("pattern_path")
        .value_name("PATTERN_FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("pattern_text")
        .help("File containing the pattern (`-` for stdin)")
}

/// Inline pattern text (-p/--pattern).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('p')
        .long("pattern")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Inline pattern text")
}

/// Read the pattern as replacement text (--replace).
pub fn replace_arg() -> Arg {
    Arg::new("replace")
        .long("replace")
        .action(ArgAction::SetTrue)
        .help("Treat the pattern as replacement text (only escapes are special)")
}

/// Nesting limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Deepest allowed nesting of groups and classes [default: 256]")
}

/// Skip capture-group discovery (--no-group-prescan).
pub fn no_group_prescan_arg() -> Arg {
    Arg::new("no_group_prescan")
        .long("no-group-prescan")
        .action(ArgAction::SetTrue)
        .help("Do not resolve backreferences against groups found ahead of time")
}

/// Emit JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}
