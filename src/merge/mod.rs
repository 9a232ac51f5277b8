//! Line merger for `.lang` templates.
//!
//! Splices translated values into a template while reproducing comments,
//! blank lines, ordering and untouched continuation blocks verbatim.
//!
//! Input continuations use a trailing backslash, but multi-line replacement
//! values are written back as bare lines with no backslash inserted. Tools
//! consuming the merged file must tolerate raw line breaks inside a value.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::BuildHasher;

pub mod line;
pub mod report;

pub use line::LineKind;
pub use report::{coverage, scan_template, Coverage, MergeReport, TemplateLine};

use line::{classify, continues, split_lines};

/// Lookup of replacement values by exact, case-sensitive key.
pub trait Replacements {
    fn replacement(&self, key: &str) -> Option<&str>;

    /// All keys of the map, in any order.
    fn keys(&self) -> Vec<&str>;
}

impl<S: BuildHasher> Replacements for HashMap<String, String, S> {
    fn replacement(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn keys(&self) -> Vec<&str> {
        HashMap::keys(self).map(String::as_str).collect()
    }
}

impl Replacements for BTreeMap<String, String> {
    fn replacement(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn keys(&self) -> Vec<&str> {
        BTreeMap::keys(self).map(String::as_str).collect()
    }
}

/// One logical unit of a template: a single blank, comment or other line, or
/// an entry line together with its continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<'a> {
    pub kind: LineKind,
    pub key: Option<&'a str>,
    /// Zero-based index of the first physical line.
    pub start: usize,
    pub lines: &'a [&'a str],
}

/// Forward cursor over the logical units of a split template.
pub struct LogicalUnits<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LogicalUnits<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }
}

impl<'a> Iterator for LogicalUnits<'a> {
    type Item = Unit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let first = *self.lines.get(start)?;
        let (kind, key) = classify(first);

        let mut end = start + 1;
        if kind == LineKind::Entry {
            // A trailing backslash on the final line ends the block at EOF.
            while end < self.lines.len() && continues(self.lines[end - 1]) {
                end += 1;
            }
        }

        self.pos = end;
        Some(Unit { kind, key, start, lines: &self.lines[start..end] })
    }
}

/// Merge `replacements` into `template`, returning the rewritten text.
pub fn merge<R: Replacements + ?Sized>(template: &str, replacements: &R) -> String {
    merge_with_report(template, replacements).0
}

/// Same output as [`merge`], plus counters describing what was replaced.
pub fn merge_with_report<R: Replacements + ?Sized>(
    template: &str,
    replacements: &R,
) -> (String, MergeReport) {
    let lines = split_lines(template);
    let mut output: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());
    let mut report = MergeReport::default();
    let mut matched: BTreeSet<&str> = BTreeSet::new();

    for unit in LogicalUnits::new(&lines) {
        let Some(key) = unit.key else {
            output.extend(unit.lines.iter().map(|l| Cow::Borrowed(*l)));
            continue;
        };

        report.entries += 1;
        report.continuation_lines += unit.lines.len() - 1;

        match replacements.replacement(key) {
            Some(value) => {
                report.replaced += 1;
                matched.insert(key);
                let mut value_lines = value.split('\n');
                let head = value_lines.next().unwrap_or_default();
                output.push(Cow::Owned(format!("{key} = {head}")));
                output.extend(value_lines.map(Cow::Borrowed));
            }
            None => {
                report.preserved += 1;
                output.extend(unit.lines.iter().map(|l| Cow::Borrowed(*l)));
            }
        }
    }

    let mut unused: Vec<String> = replacements
        .keys()
        .into_iter()
        .filter(|key| !matched.contains(key))
        .map(str::to_string)
        .collect();
    unused.sort();
    report.unused_keys = unused;

    (output.join("\n"), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_replacements_is_identity() {
        let template = "# Client strings\n\ngreeting = Hello\nmsg = Line one\\\nLine two\nfarewell=Bye";
        assert_eq!(merge(template, &map(&[])), template);
    }

    #[test]
    fn formatting_only_template_passes_through() {
        let template = "# one\n\n   \n  # two\n";
        assert_eq!(merge(template, &map(&[("greeting", "Olá")])), template);
    }

    #[test]
    fn single_substitution_leaves_other_lines() {
        let template = "# header\ngreeting = Hello\nother = value";
        let out = merge(template, &map(&[("greeting", "Olá")]));
        assert_eq!(out, "# header\ngreeting = Olá\nother = value");
    }

    #[test]
    fn replacement_normalizes_spacing_around_equals() {
        let out = merge("greeting=Hello", &map(&[("greeting", "Olá")]));
        assert_eq!(out, "greeting = Olá");
    }

    #[test]
    fn continuation_block_is_replaced_as_one_entry() {
        let template = "msg = Line one\\\nLine two\nafter = x";
        let out = merge(template, &map(&[("msg", "Nova linha")]));
        assert_eq!(out, "msg = Nova linha\nafter = x");
    }

    #[test]
    fn continuation_block_is_kept_when_untranslated() {
        let template = "msg = Line one \\\n  Line two \\\n  Line three\nafter = x";
        let out = merge(template, &map(&[("after", "y")]));
        assert_eq!(out, "msg = Line one \\\n  Line two \\\n  Line three\nafter = y");
    }

    #[test]
    fn continuation_swallows_comment_and_blank_lines() {
        let template = "a = 1\\\n# c\\\n\nb = 2";
        let out = merge(template, &map(&[("a", "x")]));
        assert_eq!(out, "a = x\nb = 2");
        assert_eq!(merge(template, &map(&[])), template);
    }

    #[test]
    fn multi_line_value_expands_to_bare_lines() {
        let out = merge("msg = old", &map(&[("msg", "linha1\nlinha2")]));
        assert_eq!(out, "msg = linha1\nlinha2");
    }

    #[test]
    fn unmatched_key_is_byte_identical() {
        let template = "other   =   value  ";
        assert_eq!(merge(template, &map(&[("msg", "x")])), template);
    }

    #[test]
    fn trailing_continuation_at_eof_is_literal() {
        let template = "a = 1\nmsg = dangling \\";
        assert_eq!(merge(template, &map(&[])), template);
        assert_eq!(merge(template, &map(&[("msg", "ok")])), "a = 1\nmsg = ok");
    }

    #[test]
    fn duplicate_keys_are_replaced_everywhere() {
        let template = "k = one\n# again\nk = two";
        let out = merge(template, &map(&[("k", "v")]));
        assert_eq!(out, "k = v\n# again\nk = v");
    }

    #[test]
    fn empty_value_keeps_separator() {
        assert_eq!(merge("k = something", &map(&[("k", "")])), "k = ");
    }

    #[test]
    fn key_lookup_is_case_sensitive_and_untrimmed() {
        let template = "Key = a";
        assert_eq!(merge(template, &map(&[("key", "b")])), template);
        assert_eq!(merge(template, &map(&[(" Key", "b")])), template);
    }

    #[test]
    fn crlf_input_is_normalized_to_lf() {
        let out = merge("a = 1\r\nb = 2\r\n", &map(&[("b", "dois")]));
        assert_eq!(out, "a = 1\nb = dois\n");
    }

    #[test]
    fn other_lines_are_preserved() {
        let template = "  indented = kept\nstray text\nk = v";
        let out = merge(template, &map(&[("indented", "no"), ("k", "w")]));
        assert_eq!(out, "  indented = kept\nstray text\nk = w");
    }

    #[test]
    fn empty_template_stays_empty() {
        assert_eq!(merge("", &map(&[("k", "v")])), "");
    }

    #[test]
    fn merge_is_deterministic() {
        let template = "a = 1\nb = 2\\\n3\nc = 4";
        let replacements = map(&[("a", "x"), ("c", "y\nz")]);
        assert_eq!(merge(template, &replacements), merge(template, &replacements));
    }

    #[test]
    fn report_counts_entries_and_unused_keys() {
        let template = "# c\na = 1\nb = 2\\\n  3\\\n  4\nc = 5";
        let replacements = map(&[("a", "x"), ("zz", "unused"), ("b", "y")]);
        let (out, report) = merge_with_report(template, &replacements);

        assert_eq!(out, "# c\na = x\nb = y\nc = 5");
        assert_eq!(report.entries, 3);
        assert_eq!(report.replaced, 2);
        assert_eq!(report.preserved, 1);
        assert_eq!(report.continuation_lines, 2);
        assert_eq!(report.unused_keys, vec!["zz".to_string()]);
    }

    #[test]
    fn logical_units_group_continuations() {
        let lines = vec!["# c", "a = 1\\", "2", "", "x"];
        let units: Vec<Unit<'_>> = LogicalUnits::new(&lines).collect();
        let spans: Vec<(LineKind, usize, usize)> =
            units.iter().map(|u| (u.kind, u.start, u.lines.len())).collect();
        assert_eq!(
            spans,
            vec![
                (LineKind::Comment, 0, 1),
                (LineKind::Entry, 1, 2),
                (LineKind::Blank, 3, 1),
                (LineKind::Other, 4, 1),
            ]
        );
    }

    #[test]
    fn mixed_template_snapshot() {
        let template = "\
# Hytale client strings
[section markers are not entries]

menu.play = Play
menu.quit = Quit the \\
    game now
tooltip.long = First \\
    second

menu.options=Options";
        let replacements = map(&[
            ("menu.play", "Jogar"),
            ("menu.quit", "Sair do jogo"),
            ("tooltip.long", "Primeira\nsegunda"),
        ]);
        insta::assert_snapshot!(merge(template, &replacements), @r"
        # Hytale client strings
        [section markers are not entries]

        menu.play = Jogar
        menu.quit = Sair do jogo
        tooltip.long = Primeira
        segunda

        menu.options=Options
        ");
    }
}
