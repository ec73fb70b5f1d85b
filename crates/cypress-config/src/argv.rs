//! Flag value extraction from a raw argument list
//!
//! Matches are discovered from the end of the argument list toward the start,
//! so the first value yielded belongs to the last occurrence of a flag. Each
//! match narrows the search window to the arguments strictly before it, which
//! yields every occurrence exactly once.

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// A flag with a long and a short alias.
///
/// The long form also accepts `--flag=value`; the short form always takes the
/// following argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub long: &'static str,
    pub short: &'static str,
}

/// `--config`/`-c`: repeatable `key=value` configuration overrides
pub const CONFIG: Flag = Flag {
    long: "--config",
    short: "-c",
};

/// `--env`/`-e`: `key=value` environment overrides, last occurrence only
pub const ENV: Flag = Flag {
    long: "--env",
    short: "-e",
};

/// `--config-file`/`-C`: path to the configuration file
pub const CONFIG_FILE: Flag = Flag {
    long: "--config-file",
    short: "-C",
};

/// `--project`/`-P`: project root override
pub const PROJECT: Flag = Flag {
    long: "--project",
    short: "-P",
};

impl Flag {
    /// All values of this flag: long-alias matches first, then short-alias
    /// matches, each in reverse positional order.
    pub fn values<'a>(
        self,
        argv: &'a [String],
        sink: &'a dyn DiagnosticSink,
    ) -> impl Iterator<Item = &'a str> + 'a {
        scan(argv, self.long, true, sink).chain(scan(argv, self.short, false, sink))
    }

    /// The value of the last-occurring long alias, falling back to the short
    /// alias when the long one is absent or empty.
    pub fn find_first_value<'a>(
        self,
        argv: &'a [String],
        sink: &'a dyn DiagnosticSink,
    ) -> Option<&'a str> {
        find_first_value(argv, self.long, true, sink)
            .filter(|value| !value.is_empty())
            .or_else(|| find_first_value(argv, self.short, false, sink))
            .filter(|value| !value.is_empty())
    }
}

/// Iterator over the values of one flag name, see [`scan`].
#[derive(Clone)]
pub struct ArgvMatches<'a> {
    argv: &'a [String],
    name: &'a str,
    allow_equals: bool,
    before: usize,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Iterator for ArgvMatches<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.argv[..self.before]
            .iter()
            .rposition(|arg| arg.starts_with(self.name))
        {
            self.before = index;
            let arg = self.argv[index].as_str();

            if arg == self.name {
                match self.argv.get(index + 1) {
                    Some(value) => return Some(value.as_str()),
                    None => self.sink.emit(Diagnostic::MissingFlagArgument {
                        flag: self.name.to_string(),
                    }),
                }
            } else if self.allow_equals && arg.as_bytes().get(self.name.len()) == Some(&b'=') {
                return Some(&arg[self.name.len() + 1..]);
            }
        }
        None
    }
}

/// Scan `argv` for `name`, yielding its values from the last occurrence to
/// the first.
///
/// An argument equal to `name` yields the argument following it; when it is
/// the final argument a [`Diagnostic::MissingFlagArgument`] is emitted and
/// nothing is yielded. With `allow_equals`, `name=value` yields `value`.
pub fn scan<'a>(
    argv: &'a [String],
    name: &'a str,
    allow_equals: bool,
    sink: &'a dyn DiagnosticSink,
) -> ArgvMatches<'a> {
    ArgvMatches {
        argv,
        name,
        allow_equals,
        before: argv.len(),
        sink,
    }
}

/// The value of the last occurrence of `name`, if any.
pub fn find_first_value<'a>(
    argv: &'a [String],
    name: &'a str,
    allow_equals: bool,
    sink: &'a dyn DiagnosticSink,
) -> Option<&'a str> {
    scan(argv, name, allow_equals, sink).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn yields_values_last_to_first() {
        let sink = RecordingSink::new();
        let argv = args(&["--config", "a=1", "run", "--config=b=2", "--config", "c=3"]);

        let values: Vec<_> = scan(&argv, "--config", true, &sink).collect();
        assert_eq!(values, vec!["c=3", "b=2", "a=1"]);
    }

    #[test]
    fn equals_form_requires_permission() {
        let sink = RecordingSink::new();
        let argv = args(&["-c=a=1"]);

        assert_eq!(scan(&argv, "-c", false, &sink).count(), 0);
    }

    #[test]
    fn longer_flag_with_same_prefix_is_not_a_match() {
        let sink = RecordingSink::new();
        let argv = args(&["--config-file", "foo.json"]);

        assert_eq!(find_first_value(&argv, "--config", true, &sink), None);
        assert_eq!(
            find_first_value(&argv, "--config-file", true, &sink),
            Some("foo.json")
        );
    }

    #[test]
    fn trailing_flag_emits_diagnostic() {
        let sink = RecordingSink::new();
        let argv = args(&["--env", "A=1", "--env"]);

        let values: Vec<_> = scan(&argv, "--env", true, &sink).collect();
        assert_eq!(values, vec!["A=1"]);
        assert_eq!(
            sink.diagnostics(),
            vec![Diagnostic::MissingFlagArgument {
                flag: "--env".into()
            }]
        );
    }

    #[test]
    fn long_alias_is_consulted_before_short() {
        let sink = RecordingSink::new();
        let argv = args(&["--config", "a=1", "-c", "b=2"]);

        let values: Vec<_> = CONFIG.values(&argv, &sink).collect();
        assert_eq!(values, vec!["a=1", "b=2"]);
    }

    #[test]
    fn empty_long_value_falls_back_to_short() {
        let sink = RecordingSink::new();
        let argv = args(&["-P", "foo", "--project="]);

        assert_eq!(PROJECT.find_first_value(&argv, &sink), Some("foo"));
    }
}
