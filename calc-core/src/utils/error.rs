use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::parser::prelude::{ParseError, ParseErrorType};
use super::diagnostic::{Diagnostic, Label, Level, Location};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to evaluate expression")]
    Parse {
        path: PathBuf,
        src: Vec<u8>,
        error: ParseError
    },
    #[error("IO operation failed")]
    StdIo {
        path: PathBuf,
        err: std::io::ErrorKind
    },
    #[error("output path is not a directory")]
    NotADirectory {
        path: PathBuf
    },
    #[error("no expressions found")]
    NoInput {
        path: PathBuf
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        let diagnostic = self.to_diagnostic();
        diagnostic.write(buf);
        writeln!(buf).expect("write new line diagnostic");
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();

                let title = match error.error {
                    ParseErrorType::DivisionByZero
                    | ParseErrorType::ZeroToNegativePower
                    | ParseErrorType::NegativeBaseFractionalExponent => "Arithmetic error",
                    ParseErrorType::LexError { .. } => "Lexical error",
                    _ => "Syntax error",
                };
                let title = format!("{title} at position {}", error.position());

                // Spans are byte offsets, so they can only be drawn over the source as is.
                match std::str::from_utf8(src) {
                    Ok(src) => Diagnostic {
                        title,
                        text: extra.join("\n"),
                        level: Level::Error,
                        location: Some(Location {
                            src,
                            path: path.clone(),
                            label: Label {
                                text: Some(label.to_string()),
                                span: error.span,
                            },
                        }),
                    },
                    Err(_) => Diagnostic {
                        title,
                        text: std::iter::once(label.to_string())
                            .chain(extra)
                            .collect::<Vec<_>>()
                            .join("\n"),
                        level: Level::Error,
                        location: None,
                    }
                }
            },
            Error::StdIo { path, err } => {
                Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{}: {err}", path.display()),
                    level: Level::Error,
                    location: None,
                }
            },
            Error::NotADirectory { path } => {
                Diagnostic {
                    title: "Invalid output directory".into(),
                    text: format!("`{}` exists but is not a directory", path.display()),
                    level: Level::Error,
                    location: None,
                }
            },
            Error::NoInput { path } => {
                Diagnostic {
                    title: "Nothing to evaluate".into(),
                    text: format!("No `.txt` files found in `{}`", path.display()),
                    level: Level::Warning,
                    location: None,
                }
            }
        }
    }
}
