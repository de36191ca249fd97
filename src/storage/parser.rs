use crate::domain::{Config, Course, CourseId};

/// The UTF-8 byte-order marker, as it appears after decoding.
const BOM: char = '\u{feff}';

/// The result of parsing one line of catalog text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or comment line. Produces neither a course nor a defect.
    Skip,

    /// A well-formed course line.
    Course(Course),

    /// The line has fewer than the two required fields (identifier and
    /// title).
    TooFewFields,
}

/// Converts lines of delimited text into courses.
///
/// A line has the shape `ID<d>Title[<d>Prereq...]`, where `<d>` is the
/// configured delimiter. The split is naive: a delimiter inside a title
/// splits it. Identifiers are canonicalized, titles are kept verbatim, and
/// empty prerequisite fields are dropped.
///
/// The parser is stateful only to recognise the first content line of a
/// file, which may carry a byte-order marker.
#[derive(Debug)]
pub struct LineParser<'a> {
    config: &'a Config,
    seen_content: bool,
}

impl<'a> LineParser<'a> {
    /// Creates a parser for a fresh file.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self {
            config,
            seen_content: false,
        }
    }

    /// Parses one line.
    ///
    /// This never fails; malformed input is reported as
    /// [`ParsedLine::TooFewFields`].
    pub fn parse(&mut self, raw: &str) -> ParsedLine {
        let mut line = raw.trim();
        if self.is_skipped(line) {
            return ParsedLine::Skip;
        }

        if !self.seen_content {
            self.seen_content = true;
            if let Some(rest) = line.strip_prefix(BOM) {
                line = rest.trim();
                if self.is_skipped(line) {
                    return ParsedLine::Skip;
                }
            }
        }

        let mut fields = line.split(self.config.delimiter()).map(str::trim);
        let (Some(id), Some(title)) = (fields.next(), fields.next()) else {
            return ParsedLine::TooFewFields;
        };

        let prerequisites = fields
            .filter(|field| !field.is_empty())
            .map(CourseId::new)
            .collect();

        ParsedLine::Course(Course::new(
            CourseId::new(id),
            title.to_string(),
            prerequisites,
        ))
    }

    fn is_skipped(&self, line: &str) -> bool {
        line.is_empty() || self.config.is_comment(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> ParsedLine {
        let config = Config::default();
        LineParser::new(&config).parse(line)
    }

    fn expect_course(parsed: ParsedLine) -> Course {
        match parsed {
            ParsedLine::Course(course) => course,
            other => panic!("expected a course, got {other:?}"),
        }
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_one(""), ParsedLine::Skip);
        assert_eq!(parse_one("   \t "), ParsedLine::Skip);
        assert_eq!(parse_one("// course list"), ParsedLine::Skip);
        assert_eq!(parse_one("   # course list"), ParsedLine::Skip);
    }

    #[test]
    fn parses_full_line() {
        let course = expect_course(parse_one(
            " csci300 , Introduction to Algorithms , csci200, math201 ",
        ));

        assert_eq!(course.id().as_str(), "CSCI300");
        assert_eq!(course.title(), "Introduction to Algorithms");
        assert_eq!(
            course.prerequisites(),
            &[CourseId::new("CSCI200"), CourseId::new("MATH201")]
        );
    }

    #[test]
    fn title_case_is_preserved() {
        let course = expect_course(parse_one("csci100,intro TO computing"));
        assert_eq!(course.title(), "intro TO computing");
    }

    #[test]
    fn empty_prerequisite_fields_are_dropped() {
        let course = expect_course(parse_one("CSCI101,Intro,,CSCI100, ,"));
        assert_eq!(course.prerequisites(), &[CourseId::new("CSCI100")]);
    }

    #[test]
    fn single_field_is_too_few() {
        assert_eq!(parse_one("CSCI101"), ParsedLine::TooFewFields);
    }

    #[test]
    fn empty_title_still_counts_as_a_field() {
        let course = expect_course(parse_one("CSCI101,"));
        assert_eq!(course.title(), "");
        assert!(course.prerequisites().is_empty());
    }

    #[test]
    fn delimiter_inside_title_splits_it() {
        let course = expect_course(parse_one("CSCI400,Large Software Development, Part 1"));
        assert_eq!(course.title(), "Large Software Development");
        assert_eq!(course.prerequisites(), &[CourseId::new("PART 1")]);
    }

    #[test]
    fn strips_bom_on_first_content_line() {
        let config = Config::default();
        let mut parser = LineParser::new(&config);

        assert_eq!(parser.parse(""), ParsedLine::Skip);
        let course = expect_course(parser.parse("\u{feff}CSCI100,Foundations"));
        assert_eq!(course.id().as_str(), "CSCI100");
    }

    #[test]
    fn bom_before_comment_is_skipped() {
        let config = Config::default();
        let mut parser = LineParser::new(&config);

        assert_eq!(parser.parse("\u{feff}# header"), ParsedLine::Skip);
    }

    #[test]
    fn bom_is_only_stripped_once() {
        let config = Config::default();
        let mut parser = LineParser::new(&config);

        expect_course(parser.parse("CSCI100,Foundations"));
        let course = expect_course(parser.parse("\u{feff}CSCI101,Intro"));
        assert_eq!(course.id().as_str(), "\u{feff}CSCI101");
    }

    #[test]
    fn honours_configured_delimiter() {
        let config = Config::default().with_delimiter(';');
        let mut parser = LineParser::new(&config);

        let course = expect_course(parser.parse("CSCI101;Intro, with comma;CSCI100"));
        assert_eq!(course.title(), "Intro, with comma");
        assert_eq!(course.prerequisites(), &[CourseId::new("CSCI100")]);
    }
}
