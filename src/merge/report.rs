//! Merge statistics and template coverage.

use serde::Serialize;
use std::collections::BTreeSet;

use super::line::split_lines;
use super::{LineKind, LogicalUnits, Replacements};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Logical entries found in the template.
    pub entries: usize,
    pub replaced: usize,
    pub preserved: usize,
    /// Physical lines consumed as continuations of an entry.
    pub continuation_lines: usize,
    /// Replacement keys that matched no entry, sorted.
    pub unused_keys: Vec<String>,
}

/// Owned view of one logical unit, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateLine {
    pub kind: LineKind,
    pub key: Option<String>,
    /// One-based line number of the first physical line.
    pub line: usize,
    /// Number of physical lines in the unit.
    pub span: usize,
}

pub fn scan_template(template: &str) -> Vec<TemplateLine> {
    let lines = split_lines(template);
    LogicalUnits::new(&lines)
        .map(|unit| TemplateLine {
            kind: unit.kind,
            key: unit.key.map(str::to_string),
            line: unit.start + 1,
            span: unit.lines.len(),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub translated: Vec<String>,
    pub untranslated: Vec<String>,
    pub unused: Vec<String>,
}

impl Coverage {
    /// Share of distinct template keys that have a translation, 0.0 to 1.0.
    pub fn ratio(&self) -> f64 {
        let total = self.translated.len() + self.untranslated.len();
        if total == 0 {
            return 1.0;
        }
        self.translated.len() as f64 / total as f64
    }
}

/// Compare the distinct keys of `template` against `replacements`.
pub fn coverage<R: Replacements + ?Sized>(template: &str, replacements: &R) -> Coverage {
    let template_keys: BTreeSet<String> =
        scan_template(template).into_iter().filter_map(|unit| unit.key).collect();

    let mut result = Coverage::default();
    for key in &template_keys {
        if replacements.replacement(key).is_some() {
            result.translated.push(key.clone());
        } else {
            result.untranslated.push(key.clone());
        }
    }

    let mut unused: Vec<String> = replacements
        .keys()
        .into_iter()
        .filter(|key| !template_keys.contains(*key))
        .map(str::to_string)
        .collect();
    unused.sort();
    result.unused = unused;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn scan_template_reports_spans() {
        let units = scan_template("# c\nmsg = a\\\n b\n\nstray");
        assert_eq!(units.len(), 4);
        assert_eq!(units[1].kind, LineKind::Entry);
        assert_eq!(units[1].key.as_deref(), Some("msg"));
        assert_eq!(units[1].line, 2);
        assert_eq!(units[1].span, 2);
        assert_eq!(units[3].kind, LineKind::Other);
        assert_eq!(units[3].line, 5);
    }

    #[test]
    fn coverage_splits_keys_three_ways() {
        let mut dict = BTreeMap::new();
        dict.insert("a".to_string(), "x".to_string());
        dict.insert("extra".to_string(), "y".to_string());

        let cov = coverage("a = 1\nb = 2\na = 3", &dict);
        assert_eq!(cov.translated, vec!["a"]);
        assert_eq!(cov.untranslated, vec!["b"]);
        assert_eq!(cov.unused, vec!["extra"]);
        assert!((cov.ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn coverage_of_keyless_template_is_complete() {
        let cov = coverage("# only comments", &BTreeMap::new());
        assert_eq!(cov.ratio(), 1.0);
    }
}
