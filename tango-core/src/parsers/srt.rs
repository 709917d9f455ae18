use regex::Regex;

/// Reduces SubRip content to its dialogue text.
///
/// Cue numbers and timing lines become empty lines so the line count of
/// the input is unchanged. Inline markup (`<i>`, `<font ...>`, `{\an8}`)
/// is removed from dialogue lines.
pub fn clean(text: &str) -> String {
    let index_re = Regex::new(r"^\d+$").unwrap();
    let timing_re =
        Regex::new(r"^\d{1,2}:\d{2}:\d{2}[,.]\d{1,3}\s*-->\s*\d{1,2}:\d{2}:\d{2}[,.]\d{1,3}")
            .unwrap();
    let tag_re = Regex::new(r"<[^>]*>|\{\\[^}]*\}").unwrap();

    let mut out: Vec<String> = Vec::new();

    for line in text.lines() {
        // Remove only CR (Windows line endings)
        let line = line.trim_end_matches('\r');
        let logical = line.trim().trim_start_matches('\u{feff}');

        if index_re.is_match(logical) || timing_re.is_match(logical) {
            out.push(String::new());
            continue;
        }

        out.push(tag_re.replace_all(line, "").into_owned());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cues_and_tags() {
        let srt = "1\r\n00:00:01,000 --> 00:00:03,500\r\n<i>先生が来た</i>\r\n\r\n2\r\n00:00:04,000 --> 00:00:05,000\r\n{\\an8}行こう\r\n";

        assert_eq!(clean(srt), "\n\n先生が来た\n\n\n\n行こう");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(clean("猫が来た\n犬が来た"), "猫が来た\n犬が来た");
    }
}
