//! Command-line password generator.
//!
//! Builds a charset from the selected categories and prints `-n` passwords of
//! `-l` characters. Passwords come from the operating system CSPRNG unless
//! `-seed <hex>` is given, in which case they are derived from the seed with
//! HMAC-SHA3-512 and are identical on every run.
//!
//! # Usage
//!
//! ```sh
//! pwgen                       # six 12-character passwords, [a-zA-Z0-9]
//! pwgen -l 20 -n 1 -S -H      # one 20-character password with symbols, no l1IO0
//! pwgen -U=false -spell       # lowercase and digits, spelled out
//! pwgen -seed 0000...0000     # reproducible output
//! ```
//!
//! Spelled output puts the password and its phonetic form on one line:
//!
//! ```text
//! Ab1 Alpha-bravo-ONE
//! ```

pub mod cli;
pub mod config;
pub mod error;

use std::io::Write;

use pwgen_core::{ByteSource, Charset, PasswordGenerator, SecureSource, SeededSource, spell};

pub use cli::{Args, normalize_args};
pub use config::GeneratorConfig;
pub use error::Error;

/// Picks the byte source for `config`: seeded when a seed was given, otherwise
/// the OS random source.
pub fn select_source(config: &GeneratorConfig) -> Box<dyn ByteSource> {
    match &config.seed {
        Some(seed) => {
            tracing::debug!(seed_len = seed.len(), "using seeded source");
            Box::new(SeededSource::new(seed))
        }
        None => {
            tracing::debug!("using operating system random source");
            Box::new(SecureSource)
        }
    }
}

/// Generates every password for `config` and writes them to `out`.
pub fn run<W: Write>(config: &GeneratorConfig, out: &mut W) -> Result<(), Error> {
    let charset = Charset::from_classes(&config.classes)?;
    let mut generator = PasswordGenerator::new(select_source(config), charset);
    write_passwords(config, &mut generator, out)
}

/// Writes `config.count` passwords from `generator`, one per line.
pub fn write_passwords<S: ByteSource, W: Write>(
    config: &GeneratorConfig,
    generator: &mut PasswordGenerator<S>,
    out: &mut W,
) -> Result<(), Error> {
    for _ in 0..config.count {
        let password = generator.generate(config.length)?;
        if config.spell {
            writeln!(out, "{} {}", password, spell(&password))?;
        } else {
            writeln!(out, "{}", password)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwgen_core::CharClasses;
    use pwgen_core::charset::AMBIGUOUS;

    fn output(config: &GeneratorConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn seeded(length: usize, count: usize, classes: CharClasses) -> GeneratorConfig {
        GeneratorConfig { length, count, classes, spell: false, seed: Some(vec![0u8; 32]) }
    }

    fn lowercase_only() -> CharClasses {
        CharClasses { upper: false, numeric: false, ..CharClasses::default() }
    }

    #[test]
    fn test_seeded_lowercase_output() {
        let config = seeded(8, 3, lowercase_only());
        assert_eq!(output(&config), "mmpcqmki\nqlttikmf\nwgpjkdsx\n");
    }

    #[test]
    fn test_seeded_default_output() {
        let config = seeded(12, 6, CharClasses::default());
        let expected = [
            "Smfs6iK8MRTT",
            "OG2F2mpja19Y",
            "nVZtEGRedQlY",
            "snlNy1PN2WN1",
            "7P8EC7Q0MTT4",
            "ex1z6tId536Z",
        ];
        assert_eq!(output(&config).lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_seeded_runs_match() {
        let config = seeded(16, 10, CharClasses { special: true, ..CharClasses::default() });
        assert_eq!(output(&config), output(&config));
    }

    #[test]
    fn test_spelled_output() {
        let config = GeneratorConfig { spell: true, ..seeded(8, 1, lowercase_only()) };
        assert_eq!(
            output(&config),
            "mmpcqmki mike-mike-papa-charlie-quebec-mike-kilo-india\n"
        );
    }

    #[test]
    fn test_unseeded_output_shape() {
        let config = GeneratorConfig { length: 20, count: 4, ..GeneratorConfig::default() };
        let text = output(&config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.len() == 20 && l.chars().all(|c| c.is_ascii_alphanumeric())));
    }

    #[test]
    fn test_avoid_ambiguous_output() {
        let classes = CharClasses {
            lower: true,
            upper: true,
            numeric: true,
            special: true,
            exclude_ambiguous: true,
        };
        let config = GeneratorConfig { length: 64, count: 50, classes, spell: false, seed: None };
        let text = output(&config);
        assert!(!text.chars().any(|c| AMBIGUOUS.contains(c)));
    }

    #[test]
    fn test_no_categories_produces_nothing() {
        let classes = CharClasses {
            lower: false,
            upper: false,
            numeric: false,
            special: false,
            exclude_ambiguous: false,
        };
        let config = GeneratorConfig { classes, ..GeneratorConfig::default() };
        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();
        assert!(err.is_configuration());
        assert!(out.is_empty());
    }

    /// Hands out `remaining` bytes of zeros, then reports an OS failure.
    struct FailingSource {
        remaining: usize,
    }

    impl ByteSource for FailingSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> pwgen_core::Result<()> {
            if dest.len() > self.remaining {
                let cause = pwgen_core::RandError::new("entropy source unavailable");
                return Err(pwgen_core::Error::Entropy(cause));
            }
            self.remaining -= dest.len();
            dest.fill(0);
            Ok(())
        }
    }

    #[test]
    fn test_entropy_failure_is_fatal() {
        let config = GeneratorConfig { length: 4, count: 3, ..GeneratorConfig::default() };
        let charset = Charset::from_classes(&config.classes).unwrap();
        let mut generator = PasswordGenerator::new(FailingSource { remaining: 6 }, charset);
        let mut out = Vec::new();

        let err = write_passwords(&config, &mut generator, &mut out).unwrap_err();
        assert!(matches!(err, Error::Generation(pwgen_core::Error::Entropy(_))));
        assert!(!err.is_configuration());
        // The first password is complete, the second never reaches the output.
        assert_eq!(String::from_utf8(out).unwrap(), "aaaa\n");
    }

    #[test]
    fn test_zero_count() {
        let config = GeneratorConfig { count: 0, ..seeded(8, 0, lowercase_only()) };
        assert_eq!(output(&config), "");
    }
}
