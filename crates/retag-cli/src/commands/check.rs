use std::path::PathBuf;

use retag_lib::Status;

use super::input::{load_or_exit, origin};
use super::options::TagOptions;

pub struct CheckArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub options: TagOptions,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let pattern = load_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());
    let path = origin(args.pattern_path.as_deref());

    let mut tagger = args.options.tagger();
    let status = tagger.try_parse(&pattern);

    if !passes(status, args.strict) {
        let mut printer = tagger
            .diagnostics()
            .printer()
            .pattern(&pattern)
            .colored(args.color);
        if let Some(path) = &path {
            printer = printer.path(path);
        }
        eprint!("{}", printer.render());
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Unfinished fails like Error; Warning fails only when `strict`.
pub fn passes(status: Status, strict: bool) -> bool {
    match status {
        Status::Ok => true,
        Status::Warning => !strict,
        Status::Error | Status::Unfinished => false,
    }
}
