use regex::Regex;

use crate::Result;

/// Splits text into sentence-like units on a delimiter regex.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    separator: Regex,
}

impl SentenceSplitter {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            separator: Regex::new(pattern)?,
        })
    }

    /// Leading, trailing and consecutive delimiters produce empty
    /// fragments; they are kept.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.separator.split(text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_full_width_period() {
        let splitter = SentenceSplitter::new("。").unwrap();
        assert_eq!(
            splitter.split("猫が来た。犬が来た。"),
            vec!["猫が来た", "犬が来た", ""]
        );
    }

    #[test]
    fn keeps_empty_fragments() {
        let splitter = SentenceSplitter::new(r"\n").unwrap();
        assert_eq!(splitter.split("\na\n\nb"), vec!["", "a", "", "b"]);
    }

    #[test]
    fn rejects_bad_pattern() {
        assert!(SentenceSplitter::new("(").is_err());
    }
}
