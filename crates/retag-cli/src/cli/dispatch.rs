//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap; hidden flags
//! a command accepts for symmetry are not extracted.

use std::path::PathBuf;

use clap::ArgMatches;
use retag_lib::Mode;

use super::ColorChoice;
use crate::commands::categories::CategoriesArgs;
use crate::commands::check::CheckArgs;
use crate::commands::options::TagOptions;
use crate::commands::tree::TreeArgs;

pub struct TreeParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub options: TagOptions,
    pub json: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            options: parse_options(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            options: p.options,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub options: TagOptions,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            options: parse_options(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            options: p.options,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CategoriesParams {
    pub json: bool,
}

impl CategoriesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<CategoriesParams> for CategoriesArgs {
    fn from(p: CategoriesParams) -> Self {
        Self { json: p.json }
    }
}

fn parse_options(m: &ArgMatches) -> TagOptions {
    TagOptions {
        mode: if m.get_flag("replace") {
            Mode::Replace
        } else {
            Mode::Search
        },
        max_depth: m.get_one::<u32>("max_depth").copied(),
        group_prescan: !m.get_flag("no_group_prescan"),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
