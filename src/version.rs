use std::fmt::{self, Display};


/// The Python language versions the tokenizer can target. Ordered, so that
/// version gates can be expressed as plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PythonVersion {
	V24,
	V25,
	V26,
	V27,
	V30,
	V31,
	V32,
	V33,
	V34,
	V35,
	V36,
	V37,
	V38,
}


impl PythonVersion {
	pub fn is_2x(self) -> bool {
		self <= Self::V27
	}


	pub fn is_3x(self) -> bool {
		self >= Self::V30
	}
}


impl Default for PythonVersion {
	fn default() -> Self {
		Self::V38
	}
}


impl Display for PythonVersion {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let version = match self {
			Self::V24 => "2.4",
			Self::V25 => "2.5",
			Self::V26 => "2.6",
			Self::V27 => "2.7",
			Self::V30 => "3.0",
			Self::V31 => "3.1",
			Self::V32 => "3.2",
			Self::V33 => "3.3",
			Self::V34 => "3.4",
			Self::V35 => "3.5",
			Self::V36 => "3.6",
			Self::V37 => "3.7",
			Self::V38 => "3.8",
		};

		version.fmt(f)
	}
}


impl std::str::FromStr for PythonVersion {
	type Err = InvalidVersion;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		match input {
			"2.4" => Ok(Self::V24),
			"2.5" => Ok(Self::V25),
			"2.6" => Ok(Self::V26),
			"2.7" => Ok(Self::V27),
			"3.0" => Ok(Self::V30),
			"3.1" => Ok(Self::V31),
			"3.2" => Ok(Self::V32),
			"3.3" => Ok(Self::V33),
			"3.4" => Ok(Self::V34),
			"3.5" => Ok(Self::V35),
			"3.6" => Ok(Self::V36),
			"3.7" => Ok(Self::V37),
			"3.8" => Ok(Self::V38),
			_ => Err(InvalidVersion),
		}
	}
}


/// Error for version strings outside the supported range.
#[derive(Debug)]
pub struct InvalidVersion;


impl Display for InvalidVersion {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		"unsupported python version".fmt(f)
	}
}


impl std::error::Error for InvalidVersion {}
