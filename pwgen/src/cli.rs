use std::ffi::OsString;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use pwgen_core::CharClasses;

use crate::config::GeneratorConfig;
use crate::error::Error;

/// Long options that are also accepted with a single leading dash.
const SINGLE_DASH_LONG: &[&str] = &["spell", "seed"];

#[derive(Parser, Debug)]
#[command(name = "pwgen")]
#[command(about = "Generate random passwords, or reproducible ones from a hex seed")]
pub struct Args {
    /// Password length
    #[arg(short = 'l', default_value_t = 12)]
    pub length: usize,

    /// Number of passwords to generate; zero or negative generates none
    #[arg(short = 'n', default_value_t = 6, allow_negative_numbers = true)]
    pub count: i64,

    /// Use lowercase characters (-L=false to disable)
    #[arg(
        short = 'L',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub lower: bool,

    /// Use uppercase characters (-U=false to disable)
    #[arg(
        short = 'U',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub upper: bool,

    /// Use numeric characters (-N=false to disable)
    #[arg(
        short = 'N',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub numeric: bool,

    /// Use special characters
    #[arg(
        short = 'S',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub special: bool,

    /// Avoid ambiguous characters (l1IO0)
    #[arg(
        short = 'H',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub avoid_ambiguous: bool,

    /// Spell passwords using the phonetic alphabet
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub spell: bool,

    /// Optional hex seed for deterministic password generation
    #[arg(long, value_name = "HEX")]
    pub seed: Option<String>,
}

impl Args {
    /// Parses arguments after rewriting `-spell` and `-seed` to their
    /// double-dash form.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    pub fn classes(&self) -> CharClasses {
        CharClasses {
            lower: self.lower,
            upper: self.upper,
            numeric: self.numeric,
            special: self.special,
            exclude_ambiguous: self.avoid_ambiguous,
        }
    }

    /// Validates the arguments and decodes the seed.
    pub fn into_config(self) -> Result<GeneratorConfig, Error> {
        let classes = self.classes();
        if !classes.any() {
            return Err(Error::NoCharacterSet);
        }

        let seed = match self.seed.as_deref() {
            None | Some("") => None,
            Some(hex_seed) => {
                Some(hex::decode(hex_seed).map_err(|source| Error::InvalidSeed { source })?)
            }
        };

        Ok(GeneratorConfig {
            length: self.length,
            count: usize::try_from(self.count).unwrap_or(0),
            classes,
            spell: self.spell,
            seed,
        })
    }
}

/// Rewrites `-spell`, `-seed` and `-seed=<hex>` as their `--` forms.
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            let is_single_dash_long = s
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
                .is_some_and(|name| SINGLE_DASH_LONG.contains(&name));
            if is_single_dash_long { OsString::from(format!("-{s}")) } else { arg }
        })
        .collect()
}
