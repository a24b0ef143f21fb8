use crate::core::ParserConfig;
use crate::io::{EncodingChoice, Language};
use crate::pipeline::{ParseOptions, TableOptions};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

/// Parse Zengin bulk transfer files into a transfer table
#[derive(Parser, Debug)]
#[command(name = "zengin-parser")]
#[command(about = "Parse Zengin bulk transfer files into a transfer table", long_about = None)]
pub struct CliArgs {
    /// Input Zengin file path
    #[arg(
        value_name = "INPUT",
        default_value = "zengin.txt",
        help = "Path to the Zengin file"
    )]
    pub input_file: PathBuf,

    /// Column labels of the output table
    #[arg(
        long = "lang",
        value_name = "LANG",
        default_value = "en",
        help = "Header labels: 'en' for English or 'ja' for Japanese"
    )]
    pub lang: LangArg,

    /// Prepend the transfer date column (Japanese layout only)
    #[arg(long = "with-date", help = "Prepend the transfer date column (ja only)")]
    pub with_date: bool,

    /// Input encoding
    #[arg(
        long = "encoding",
        value_name = "ENCODING",
        default_value = "auto",
        help = "Input encoding: 'auto', 'shift-jis' or 'utf-8'"
    )]
    pub encoding: EncodingArg,

    /// Reject records that are not exactly 120 characters long
    #[arg(long = "strict-length", help = "Require every record to be exactly 120 characters")]
    pub strict_length: bool,

    /// Treat stray unprintable lines as errors instead of skipping them
    #[arg(
        long = "no-skip-unprintable",
        help = "Fail on unprintable lines instead of skipping them"
    )]
    pub no_skip_unprintable: bool,

    /// Log verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    pub verbose: u8,
}

/// Output table languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    En,
    Ja,
}

/// Input encodings accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    Auto,
    #[value(name = "shift-jis")]
    ShiftJis,
    #[value(name = "utf-8")]
    Utf8,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Language::English,
            LangArg::Ja => Language::Japanese,
        }
    }
}

impl From<EncodingArg> for EncodingChoice {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Auto => EncodingChoice::Auto,
            EncodingArg::ShiftJis => EncodingChoice::ShiftJis,
            EncodingArg::Utf8 => EncodingChoice::Utf8,
        }
    }
}

impl CliArgs {
    /// Create ParseOptions from CLI arguments
    pub fn to_parse_options(&self) -> ParseOptions {
        ParseOptions {
            encoding: self.encoding.into(),
            parser: ParserConfig {
                skip_unprintable_lines: !self.no_skip_unprintable,
                strict_record_length: self.strict_length,
            },
        }
    }

    /// Create TableOptions from CLI arguments
    ///
    /// `--with-date` only applies to the Japanese layout; with `--lang en`
    /// it is dropped and a warning is logged.
    pub fn to_table_options(&self) -> TableOptions {
        let language = Language::from(self.lang);
        if self.with_date && language == Language::English {
            warn!("--with-date is ignored for the English layout");
        }
        TableOptions {
            language,
            with_date: self.with_date && language == Language::Japanese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_input(&["program"], "zengin.txt")]
    #[case::explicit_input(&["program", "transfers.txt"], "transfers.txt")]
    fn test_input_file(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from(expected));
    }

    #[rstest]
    #[case::default_lang(&["program", "in.txt"], LangArg::En)]
    #[case::english(&["program", "--lang", "en", "in.txt"], LangArg::En)]
    #[case::japanese(&["program", "--lang", "ja", "in.txt"], LangArg::Ja)]
    fn test_lang_parsing(#[case] args: &[&str], #[case] expected: LangArg) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.lang, expected);
    }

    #[rstest]
    #[case::default_encoding(&["program"], EncodingChoice::Auto)]
    #[case::shift_jis(&["program", "--encoding", "shift-jis"], EncodingChoice::ShiftJis)]
    #[case::utf8(&["program", "--encoding", "utf-8"], EncodingChoice::Utf8)]
    fn test_encoding_parsing(#[case] args: &[&str], #[case] expected: EncodingChoice) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_parse_options().encoding, expected);
    }

    #[rstest]
    #[case::defaults(&["program"], true, false)]
    #[case::strict(&["program", "--strict-length"], true, true)]
    #[case::no_skip(&["program", "--no-skip-unprintable"], false, false)]
    #[case::both(&["program", "--strict-length", "--no-skip-unprintable"], false, true)]
    fn test_parser_config_conversion(
        #[case] args: &[&str],
        #[case] skip_unprintable: bool,
        #[case] strict_length: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_parse_options().parser;

        assert_eq!(config.skip_unprintable_lines, skip_unprintable);
        assert_eq!(config.strict_record_length, strict_length);
    }

    #[rstest]
    #[case::english(&["program"], Language::English, false)]
    #[case::japanese(&["program", "--lang", "ja"], Language::Japanese, false)]
    #[case::japanese_with_date(&["program", "--lang", "ja", "--with-date"], Language::Japanese, true)]
    #[case::english_ignores_date(&["program", "--with-date"], Language::English, false)]
    fn test_table_options_conversion(
        #[case] args: &[&str],
        #[case] language: Language,
        #[case] with_date: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let table = parsed.to_table_options();

        assert_eq!(table.language, language);
        assert_eq!(table.with_date, with_date);
    }

    #[rstest]
    #[case::none(&["program"], 0)]
    #[case::once(&["program", "-v"], 1)]
    #[case::twice(&["program", "-vv"], 2)]
    #[case::long(&["program", "--verbose", "--verbose"], 2)]
    fn test_verbosity(#[case] args: &[&str], #[case] expected: u8) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.verbose, expected);
    }

    // Error handling tests
    #[rstest]
    #[case::too_many_inputs(&["program", "a.txt", "b.txt"])]
    #[case::invalid_lang(&["program", "--lang", "fr", "in.txt"])]
    #[case::invalid_encoding(&["program", "--encoding", "euc-jp", "in.txt"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
