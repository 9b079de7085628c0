//! Configuration for the `student-rooms` command line.
//!
//! Two positional input paths (rooms, then students) plus optional `--format` and
//! `--output`. Unset options fall back to JSON written to `output.json`.

use std::path::PathBuf;

use crate::item::format::ExportFormat;

/// Default output file, whatever the format.
pub const DEFAULT_OUTPUT: &str = "output.json";

pub const USAGE: &str = "Merge rooms and students data.

Usage: student-rooms <ROOMS> <STUDENTS> [--format json|xml] [--output PATH]

Arguments:
  <ROOMS>     Path to rooms.json
  <STUDENTS>  Path to students.json

Options:
  --format    Output format [default: json]
  --output    Output file path [default: output.json]
  -h, --help  Print help";

/// Complete configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rooms_file: PathBuf,
    pub students_file: PathBuf,
    pub format: ExportFormat,
    pub output_file: PathBuf,
    /// Print usage and exit
    pub show_help: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut positional: Vec<PathBuf> = Vec::new();
        let mut format: Option<ExportFormat> = None;
        let mut output_file: Option<PathBuf> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--format" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--format requires a value".to_string());
                    }
                    format = Some(args[i].parse().map_err(|e| format!("{}", e))?);
                }
                "--output" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--output requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "-h" | "--help" => {
                    return Ok(Self {
                        rooms_file: PathBuf::new(),
                        students_file: PathBuf::new(),
                        format: ExportFormat::default(),
                        output_file: PathBuf::from(DEFAULT_OUTPUT),
                        show_help: true,
                    });
                }
                arg if arg.starts_with("--") => {
                    return Err(format!("unknown argument: {}", arg));
                }
                arg => positional.push(PathBuf::from(arg)),
            }
            i += 1;
        }

        let [rooms_file, students_file]: [PathBuf; 2] = positional.try_into().map_err(
            |paths: Vec<PathBuf>| format!("expected 2 input paths, got {}", paths.len()),
        )?;

        Ok(Self {
            rooms_file,
            students_file,
            format: format.unwrap_or_default(),
            output_file: output_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            show_help: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_should_apply() {
        let config = Config::from_args(&args(&["rooms.json", "students.json"])).unwrap();

        assert_eq!(config.rooms_file, PathBuf::from("rooms.json"));
        assert_eq!(config.students_file, PathBuf::from("students.json"));
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!config.show_help);
    }

    #[cfg(feature = "xml")]
    #[test]
    fn options_should_be_read_in_any_position() {
        let config = Config::from_args(&args(&[
            "--format", "xml", "rooms.json", "--output", "out.xml", "students.json",
        ]))
        .unwrap();

        assert_eq!(config.format, ExportFormat::Xml);
        assert_eq!(config.output_file, PathBuf::from("out.xml"));
        assert_eq!(config.students_file, PathBuf::from("students.json"));
    }

    #[test]
    fn missing_inputs_should_fail() {
        let error = Config::from_args(&args(&["rooms.json"])).unwrap_err();

        assert_eq!(error, "expected 2 input paths, got 1");
    }

    #[test]
    fn unknown_format_should_fail() {
        let error = Config::from_args(&args(&["a", "b", "--format", "yaml"])).unwrap_err();

        assert!(error.contains("unknown output format 'yaml'"));
    }

    #[test]
    fn dangling_option_should_fail() {
        assert!(Config::from_args(&args(&["a", "b", "--output"])).is_err());
    }

    #[test]
    fn help_should_short_circuit() {
        let config = Config::from_args(&args(&["--help"])).unwrap();

        assert!(config.show_help);
    }
}
