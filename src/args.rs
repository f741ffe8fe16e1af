use std::{
	ffi::{OsStr, OsString},
	path::Path,
};

use clap::{clap_app, crate_authors, crate_version, crate_description};

use crate::version::PythonVersion;


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The file to scan. Standard input when absent.
	pub script_path: Option<Box<Path>>,
	/// The targeted Python version.
	pub python: PythonVersion,
	/// Scan for diagnostics only, don't dump tokens.
	pub check: bool,
	/// Reprint the source reproduced from the scanned tokens.
	pub verbatim: bool,
	/// Produce comment and explicit line join tokens.
	pub comments: bool,
	/// Rescan statements begun inside unclosed groupings.
	pub recover_groupings: bool,
	/// Scan as a typeshed stub.
	pub stub_file: bool,
	/// Interactive input, where the last line may still be open.
	pub interactive: bool,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		Krait =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg python: --python +takes_value "The targeted Python version, 2.4 through 3.8 (default: 3.8)")
			(@arg check: --check "Scan for diagnostics only, don't dump tokens")
			(@arg verbatim: --verbatim "Reprint the source reproduced from the scanned tokens")
			(@arg comments: --comments "Produce comment and explicit line join tokens")
			(@arg recover: --("recover-groupings") "Rescan statements begun inside unclosed groupings")
			(@arg stub: --stub "Scan as a typeshed stub")
			(@arg interactive: --interactive "Interactive input, where the last line may still be open")
			(@arg FILE: "The file to scan; - or absent reads stdin")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => {
			let python = match matches.value_of("python") {
				None => PythonVersion::default(),
				Some(version) => version
					.parse()
					.map_err(
						|error| clap::Error::with_description(
							&format!("{}: {}", error, version),
							clap::ErrorKind::InvalidValue
						)
					)?,
			};

			Ok(
				Command::Run(
					Args {
						script_path: matches
							.value_of_os("FILE")
							.filter(|path| *path != OsStr::new("-"))
							.map(|path| Path::new(path).into()),
						python,
						check: matches.is_present("check"),
						verbatim: matches.is_present("verbatim"),
						comments: matches.is_present("comments"),
						recover_groupings: matches.is_present("recover"),
						stub_file: matches.is_present("stub"),
						interactive: matches.is_present("interactive"),
					}
				)
			)
		},

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
