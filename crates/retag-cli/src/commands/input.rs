use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("pattern is required: use positional PATTERN_FILE or -p/--pattern")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pattern from inline text, a file, or stdin (`-`).
///
/// One trailing line break is dropped from file and stdin input; inline text is taken as is.
pub fn load_pattern(path: Option<&Path>, text: Option<&str>) -> Result<String, InputError> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }

    let Some(path) = path else {
        return Err(InputError::Missing);
    };

    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_owned(),
            source,
        })?
    };

    Ok(strip_line_break(content))
}

/// Display name of the pattern file; `None` for stdin and inline text.
pub fn origin(path: Option<&Path>) -> Option<String> {
    path.filter(|p| p.as_os_str() != "-")
        .map(|p| p.display().to_string())
}

/// Load the pattern or exit with status 1.
pub fn load_or_exit(path: Option<&Path>, text: Option<&str>) -> String {
    load_pattern(path, text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

fn strip_line_break(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}
