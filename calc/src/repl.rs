use std::{io::Write, path::PathBuf};

use calc_core::{
	eval::prelude::{evaluate_with, format_outcome, EvalOptions},
	utils::prelude::Error
};

use crate::cli::print_error;

const PROMPT: &str = ">> ";

pub fn start(options: EvalOptions) -> std::io::Result<()> {
	let stdin = std::io::stdin();
	
	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				let outcome = evaluate_with(input.as_bytes(), &options);

				println!("{}", format_outcome(&outcome, &options));

				if let Err(error) = outcome {
					print_error(&Error::Parse {
						path: PathBuf::from("<repl>"),
						src: input.clone().into_bytes(),
						error
					});
				}
			}
		}
	}
}
