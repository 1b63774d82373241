use crate::expander::SEPARATOR;
use logscope_api::LoggerNameSource;
use std::io::BufRead;

/// A fixed set of logger names, e.g. captured from a running application.
#[derive(Debug, Clone, Default)]
pub struct StaticNameSource {
    names: Vec<String>,
}

impl StaticNameSource {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// One name per line. Blank lines and `#` comments are skipped.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut names = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let name = line.trim();
            if name.is_empty() || name.starts_with('#') {
                continue;
            }
            names.push(name.to_string());
        }
        Ok(Self { names })
    }

    pub fn extend(&mut self, other: StaticNameSource) {
        self.names.extend(other.names);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl LoggerNameSource for StaticNameSource {
    fn logger_names(&self, base: &str) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| {
                name.strip_prefix(base)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_to_dotted_descendants() {
        let source = StaticNameSource::new(["org.foo", "org.foo.Bar", "org.foobar.Baz", "com.x"]);
        assert_eq!(source.logger_names("org.foo"), vec!["org.foo", "org.foo.Bar"]);
    }

    #[test]
    fn test_from_reader_skips_blanks_and_comments() {
        let input = "# captured loggers\norg.a.B\n\n   org.a.c.D  \n#org.a.skipped\n";
        let source = StaticNameSource::from_reader(input.as_bytes()).unwrap();
        assert_eq!(source.logger_names("org.a"), vec!["org.a.B", "org.a.c.D"]);
    }
}
