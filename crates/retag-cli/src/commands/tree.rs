use std::path::PathBuf;

use retag_lib::{Mode, Tagging};
use serde_json::json;

use super::input::{load_or_exit, origin};
use super::options::TagOptions;

pub struct TreeArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub options: TagOptions,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let pattern = load_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());

    let mut tagger = args.options.tagger();
    tagger.try_parse(&pattern);
    let mode = tagger.mode();
    let tagging = tagger.into_tagging();

    if args.json {
        match render_json(&tagging, mode) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", tagging.dump());
    if !tagging.diagnostics.is_empty() {
        let path = origin(args.pattern_path.as_deref());
        let mut printer = tagging
            .diagnostics
            .printer()
            .pattern(&pattern)
            .colored(args.color);
        if let Some(path) = &path {
            printer = printer.path(path);
        }
        eprint!("{}", printer.render());
    }
}

pub fn render_json(tagging: &Tagging, mode: Mode) -> serde_json::Result<String> {
    let diagnostics: Vec<_> = tagging
        .diagnostics
        .iter()
        .map(|d| {
            json!({
                "status": d.status(),
                "start": d.range().start,
                "end": d.range().end,
                "message": d.message(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "mode": mode,
        "status": tagging.status,
        "nodes": tagging.nodes,
        "diagnostics": diagnostics,
    }))
}
