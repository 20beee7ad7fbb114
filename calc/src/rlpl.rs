use std::io::Write;

use calc_core::lexer::prelude::Lexer;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
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
				let mut lexer = Lexer::from(input.as_str());

				for (start, token, end) in lexer.by_ref() {
					println!("{:>4}..{:<4} {:?}", start + 1, end, token);
				}

				if let Some(err) = lexer.error() {
					let (message, hints) = err.details();
					println!("[at {}] Lexical Error: {}", err.position(), message);
					if !hints.is_empty() {
						println!("{}", hints.join("\n"));
					}
				}
			}
		}
	}
}
