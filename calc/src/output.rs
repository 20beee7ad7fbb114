use std::path::{Path, PathBuf};

use calc_core::{
    eval::prelude::{eval_file, format_outcome, EvalOptions},
    utils::prelude::Error
};

use crate::cli::{print_error, print_processing};

pub const DEFAULT_SUFFIX: &str = "john_doe_123456";

pub struct RunOptions {
    pub output_dir: Option<PathBuf>,
    pub suffix: String,
    pub eval: EvalOptions,
    pub explain: bool,
}

/// `dir/name.ext` becomes `<output_dir>/name_<suffix>.txt`, or
/// `name_<suffix>/name_<suffix>.txt` when no output directory is given.
pub fn output_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let base = input.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let tagged = format!("{base}_{suffix}");

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from(&tagged)
    };

    dir.join(format!("{tagged}.txt"))
}

pub fn is_expression_file(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.len() > ".txt".len() && name.ends_with(".txt"),
        None => false
    }
}

/// Creates `path` when missing. An existing non-directory is an error.
pub fn ensure_directory(path: &Path) -> Result<(), Error> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory { path: path.to_path_buf() }),
        Err(_) => std::fs::create_dir_all(path).map_err(|err| Error::StdIo {
            path: path.to_path_buf(),
            err: err.kind()
        })
    }
}

/// Evaluates one file and writes its result line. Evaluation errors are
/// part of the result; only I/O failures are returned as `Err`.
pub fn process_file(input: &Path, options: &RunOptions) -> Result<PathBuf, Error> {
    let outcome = match eval_file(input.to_path_buf(), &options.eval) {
        Ok(value) => Ok(value),
        Err(Error::Parse { path, src, error }) => {
            if options.explain {
                print_error(&Error::Parse { path, src, error: error.clone() });
            }

            Err(error)
        },
        Err(err) => return Err(err)
    };

    let line = format_outcome(&outcome, &options.eval);
    let path = output_path(input, options.output_dir.as_deref(), &options.suffix);

    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    std::fs::write(&path, format!("{line}\n")).map_err(|err| Error::StdIo {
        path: path.clone(),
        err: err.kind()
    })?;

    log::info!("{} -> {line}", input.display());

    Ok(path)
}

/// Processes every `*.txt` entry of `dir` in name order.
pub fn process_directory(dir: &Path, options: &RunOptions) -> Result<Vec<PathBuf>, Error> {
    let entries = std::fs::read_dir(dir).map_err(|err| Error::StdIo {
        path: dir.to_path_buf(),
        err: err.kind()
    })?;

    let mut inputs = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_expression_file(path))
        .collect::<Vec<PathBuf>>();

    inputs.sort();
    log::debug!("found {} expression files in {}", inputs.len(), dir.display());

    let mut written = Vec::with_capacity(inputs.len());

    for input in inputs {
        let name = input.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        print_processing(&name);
        written.push(process_file(&input, options)?);
    }

    Ok(written)
}
