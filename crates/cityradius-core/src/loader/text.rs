// crates/cityradius-core/src/loader/text.rs
use crate::error::IngestError;
use crate::model::{City, Point, PointStore, PointStoreBuilder};
use std::io::BufRead;

/// Reads `(name, coordinates)` line pairs until the input is exhausted.
pub(super) fn parse<R: BufRead>(mut reader: R) -> Result<PointStore, IngestError> {
    let mut builder = PointStoreBuilder::default();
    let mut name = String::new();
    let mut coords = String::new();
    let mut line = 0usize;

    loop {
        name.clear();
        if reader.read_line(&mut name)? == 0 {
            break;
        }
        line += 1;

        coords.clear();
        if reader.read_line(&mut coords)? == 0 {
            // Only a complete pair makes a record
            tracing::warn!(line, name = trim_eol(&name), "Dropping trailing name without coordinates");
            break;
        }
        line += 1;

        let coords = trim_eol(&coords);
        let point = parse_coords(coords).ok_or_else(|| IngestError::MalformedRecord {
            line,
            record: coords.to_string(),
        })?;
        builder.insert(City {
            name: trim_eol(&name).to_string(),
            point,
        });
    }

    if line == 0 {
        return Err(IngestError::EmptySource);
    }
    Ok(builder.build())
}

fn trim_eol(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}

/// `x sep y`, where `sep` is any whitespace-delimited token. The separator
/// may also be glued onto `x` (`1.5, 2` or `1,junk 2`). Tokens after `y`
/// are ignored.
fn parse_coords(line: &str) -> Option<Point> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;

    let x = match first.parse::<f64>() {
        Ok(x) => {
            tokens.next()?;
            x
        }
        // Longest numeric prefix; the rest of the token is the separator
        Err(_) => first
            .char_indices()
            .rev()
            .find_map(|(i, _)| first[..i].parse::<f64>().ok())?,
    };
    let y = tokens.next()?.parse::<f64>().ok()?;

    let point = Point::new(x, y);
    point.is_finite().then_some(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(data: &str) -> Result<PointStore, IngestError> {
        parse(data.as_bytes())
    }

    #[test]
    fn coordinate_forms() {
        assert_eq!(parse_coords("1 , 2"), Some(Point::new(1.0, 2.0)));
        assert_eq!(parse_coords("1.5, -2"), Some(Point::new(1.5, -2.0)));
        assert_eq!(parse_coords("  -3e2 ; 4  "), Some(Point::new(-300.0, 4.0)));
        assert_eq!(parse_coords("1 x 2 trailing"), Some(Point::new(1.0, 2.0)));
        assert_eq!(parse_coords("1,2 3"), Some(Point::new(1.0, 3.0)));
        assert_eq!(parse_coords("2.5;; -1"), Some(Point::new(2.5, -1.0)));
    }

    #[test]
    fn rejected_coordinate_lines() {
        assert_eq!(parse_coords(""), None);
        assert_eq!(parse_coords("1 2"), None);
        assert_eq!(parse_coords("1 , two"), None);
        assert_eq!(parse_coords("1 ,2"), None);
        assert_eq!(parse_coords("abc , 2"), None);
        assert_eq!(parse_coords("NaN , 2"), None);
        assert_eq!(parse_coords("1 , inf"), None);
    }

    #[test]
    fn reads_pairs_with_crlf() {
        let store = load("A\r\n0 , 0\r\nB\r\n3 , 0\r\n").unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("A"));
        assert!(store.contains("B"));
    }

    #[test]
    fn last_pair_without_newline() {
        let store = load("A\n0 , 0\nB\n3 , 4").unwrap();
        assert_eq!(store.locate("B").unwrap(), Point::new(3.0, 4.0));
    }

    #[test]
    fn trailing_name_is_dropped() {
        let store = load("A\n0 , 0\nB\n").unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.contains("B"));
    }

    #[test]
    fn separator_glued_to_text_after_x() {
        let store = load("A\n1,2 3\n").unwrap();
        assert_eq!(store.locate("A").unwrap(), Point::new(1.0, 3.0));
    }

    #[test]
    fn names_keep_inner_whitespace() {
        let store = load("New York\n1 , 1\n").unwrap();
        assert!(store.contains("New York"));
    }

    #[test]
    fn malformed_record_reports_line() {
        match load("A\n0 , 0\nB\nthree , 4\n") {
            Err(IngestError::MalformedRecord { line, record }) => {
                assert_eq!(line, 4);
                assert_eq!(record, "three , 4");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_source() {
        assert!(matches!(load(""), Err(IngestError::EmptySource)));
    }

    #[test]
    fn single_blank_line_is_not_empty() {
        let store = load("\n").unwrap();
        assert!(store.is_empty());
    }
}
