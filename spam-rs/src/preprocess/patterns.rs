//! Structured-token patterns
//!
//! Each class is collapsed to a fixed placeholder before punctuation is
//! stripped. Classes run in [`PatternClass::ORDER`]; a later class never sees
//! text that an earlier class already replaced.

use regex::{NoExpand, Regex};
use std::borrow::Cow;

use crate::error::Result;

/// A class of structured token replaced by a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternClass {
    /// `user@host.tld`, optionally wrapped in angle brackets
    Email,
    /// `http://...` or `https://...` up to the next whitespace
    Url,
    /// Anything from `<` to the next `>`
    Html,
    /// A run of decimal digits
    Number,
    /// A run of `$` signs
    Dollar,
}

impl PatternClass {
    /// Application order
    pub const ORDER: [PatternClass; 5] = [
        PatternClass::Email,
        PatternClass::Url,
        PatternClass::Html,
        PatternClass::Number,
        PatternClass::Dollar,
    ];

    /// Regular expression source for this class
    pub fn pattern(&self) -> &'static str {
        match self {
            PatternClass::Email => r"<?[^@\s]+?@[^@\s]+?\.[^@\s]+>?",
            PatternClass::Url => r"(http|https)://[^\s]*",
            PatternClass::Html => r"<[^<]*?>",
            PatternClass::Number => r"\d+",
            PatternClass::Dollar => r"\$+",
        }
    }

    /// Replacement text
    pub fn placeholder(&self) -> &'static str {
        match self {
            PatternClass::Email => " emailaddr ",
            PatternClass::Url => " httpaddr ",
            PatternClass::Html => " ",
            PatternClass::Number => " number ",
            PatternClass::Dollar => " dollar ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternClass::Email => "email",
            PatternClass::Url => "url",
            PatternClass::Html => "html",
            PatternClass::Number => "number",
            PatternClass::Dollar => "dollar",
        }
    }
}

/// Compiled patterns for one normalizer
#[derive(Debug, Clone)]
pub struct Patterns {
    classes: Vec<(PatternClass, Regex)>,
    punctuation: Regex,
    whitespace: Regex,
}

impl Patterns {
    /// Compile every class pattern plus the cleanup patterns
    pub fn compile() -> Result<Self> {
        let classes = PatternClass::ORDER
            .iter()
            .map(|class| -> Result<(PatternClass, Regex)> {
                Ok((*class, Regex::new(class.pattern())?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            classes,
            punctuation: Regex::new(r"[^\w\s]+")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Compiled regex for a class
    pub fn regex(&self, class: PatternClass) -> &Regex {
        // classes follows ORDER, which matches declaration order
        &self.classes[class as usize].1
    }

    /// Replace every structured token, class by class
    pub fn replace_all(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (class, re) in &self.classes {
            text = replace_until_stable(re, text, class.placeholder());
        }
        text
    }

    /// Collapse punctuation runs and whitespace runs to single spaces
    pub fn clean(&self, text: &str) -> String {
        let text = self.punctuation.replace_all(text, NoExpand(" "));
        self.whitespace.replace_all(&text, NoExpand(" ")).into_owned()
    }
}

/// Substitute `placeholder` for every match of `re` until nothing matches.
///
/// Terminates as long as `placeholder` contains none of the characters every
/// match of `re` must consume (`@`, `://`, `<`, digits, `$`).
fn replace_until_stable(re: &Regex, mut text: String, placeholder: &str) -> String {
    loop {
        let next = match re.replace_all(&text, NoExpand(placeholder)) {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => next,
        };
        text = next;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::compile().unwrap()
    }

    #[test]
    fn test_email_regex() {
        let p = patterns();
        let re = p.regex(PatternClass::Email);
        assert!(re.is_match("stuff <something@something.com> stuff"));
        assert!(re.is_match("stuff something@something.com stuff"));
        assert!(re.is_match("stuff s.omet.hing@so.mething.com stuff"));
        assert!(re.is_match("stuff s.omet.+1hi2ng@so.m33eta$#12hing.co4#4m stuff"));
        assert!(!re.is_match("something@something"));
        assert!(!re.is_match("somethign @something.com"));
        assert!(!re.is_match(" this is not@ an.email stuff"));
    }

    #[test]
    fn test_html_regex() {
        let p = patterns();
        let re = p.regex(PatternClass::Html);
        assert!(re.is_match("blah <this is some fake html> blah"));
        assert_eq!(re.replace_all("blah < this is some fake html>", " ").trim(), "blah");
    }

    #[test]
    fn test_url_regex() {
        let p = patterns();
        let re = p.regex(PatternClass::Url);
        assert!(re.is_match("blah http://something.com/ blah"));
        assert!(re.is_match("somethign https://albjkhaer blah"));
        assert!(!re.is_match("ftp://example.com"));
    }

    #[test]
    fn test_replace_url() {
        assert_eq!(
            patterns().replace_all("something https://example.com else"),
            "something  httpaddr  else"
        );
    }

    #[test]
    fn test_replace_email_and_url() {
        assert_eq!(
            patterns().replace_all(
                "this is a something@something.com longer thing https://example.com and stuff"
            ),
            "this is a  emailaddr  longer thing  httpaddr  and stuff"
        );
    }

    #[test]
    fn test_replace_numbers() {
        assert_eq!(
            patterns().replace_all("this has some n123umbers in23 23 it"),
            "this has some n number umbers in number   number  it"
        );
    }

    #[test]
    fn test_replace_html_and_dollars() {
        assert_eq!(
            patterns().replace_all("some <html stuff> $cash money $$</stuff>"),
            "some    dollar cash money  dollar  "
        );
    }

    #[test]
    fn test_nested_html_needs_second_pass() {
        // The inner tag goes first, which exposes "< >" to the next pass
        assert_eq!(patterns().replace_all("a<<b>>c"), "a c");
    }

    #[test]
    fn test_placeholders_do_not_rematch() {
        let p = patterns();
        for (i, class) in PatternClass::ORDER.iter().enumerate() {
            for later in &PatternClass::ORDER[i..] {
                assert!(
                    !p.regex(*later).is_match(class.placeholder()),
                    "{} placeholder matches {} pattern",
                    class.name(),
                    later.name()
                );
            }
        }
    }

    #[test]
    fn test_clean() {
        assert_eq!(
            patterns().clean("something with   ..some crap][   in a..the a;ihf; \n\n and \t stuff"),
            "something with some crap in a the a ihf and stuff"
        );
    }

    #[test]
    fn test_dollar_placeholder_is_literal() {
        // "$" in a replacement would otherwise be read as a capture reference
        assert_eq!(patterns().replace_all("$5"), " dollar  number ");
    }
}
