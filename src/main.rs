#![allow(dead_code)] // Parts of the scanning API are exercised by the tests only.

mod args;
mod fmt;
mod lexer;
mod literal;
mod source;
mod symbol;
mod term;
mod version;

use std::path::Path;

use term::color;

use args::{Args, Command};
use lexer::{
	error::Severity,
	position::{LineMap, SourceLocation},
	Options,
	TokenKind,
	Tokenizer,
};
use source::Source;


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!(
				"{}: {}",
				color::Fg(color::Red, "Error"),
				error
			);
			1
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> std::io::Result<i32> {
	let source = match args.script_path {
		Some(ref path) => Source::from_path(path.clone())?,
		None => Source::from_reader(
			Path::new("<stdin>"),
			std::io::stdin().lock()
		)?,
	};

	let options = Options {
		verbatim: args.verbatim,
		comment_tokens: args.comments,
		grouping_recovery: args.recover_groupings,
		stub_file: args.stub_file,
		interactive: args.interactive,
		..Options::default()
	};

	let mut interner = symbol::Interner::new();
	let mut errors = Vec::new();

	let mut tokenizer = Tokenizer::new(
		source.contents.chars(),
		args.python,
		options,
		&mut interner,
		&mut errors,
	);

	// ----------------------------------------------------------------------------------------
	let mut tokens = Vec::new();

	loop {
		let token = tokenizer.read_token();
		let location = tokenizer.index_to_location(token.span.start);
		let end_of_file = matches!(token.kind, TokenKind::EndOfFile);

		tokens.push((location, token));

		if end_of_file {
			break;
		}
	}

	// The line table outlives the scan, to resolve diagnostic spans.
	let mut lines = LineMap::new(SourceLocation::FIRST);
	for &record in tokenizer.newline_records() {
		lines.push(record);
	}

	// ----------------------------------------------------------------------------------------
	for error in errors.iter().take(20) {
		let location = lines.location_of(error.span.start);

		match error.severity {
			Severity::Error => eprintln!(
				"{}: {} ({}) - {}",
				color::Fg(color::Red, "Error"),
				color::Bold(source.path.display()),
				location,
				error.error
			),

			_ => eprintln!(
				"{}: {} ({}) - {}",
				color::Fg(color::Yellow, "Warning"),
				color::Bold(source.path.display()),
				location,
				error.error
			),
		}
	}

	// ----------------------------------------------------------------------------------------
	if args.verbatim {
		for (_, token) in &tokens {
			if let Some(verbatim) = &token.verbatim {
				print!("{}{}", verbatim.leading, verbatim.image);
			}
		}
	} else if !args.check {
		for (location, token) in &tokens {
			println!(
				"{}: {}",
				color::Fg(color::Blue, location),
				fmt::Show(token, &interner)
			);
		}
	}

	if errors.iter().any(|error| error.severity == Severity::Error) {
		return Ok(2);
	}

	Ok(0)
}
