//! YAML front matter extraction.
//!
//! A document may start with a block delimited by `---` lines. Leading blank
//! lines and a byte order mark are tolerated before the opening delimiter.
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Errors raised while extracting front matter.
#[derive(Debug, Error)]
pub enum FrontMatterError {
  #[error("Unterminated front matter block: expected a closing '---'")]
  Unterminated,

  #[error("Front matter parse error: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("Front matter conversion error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Front matter must be a YAML mapping at the top level")]
  InvalidRootType,
}

/// Front matter of a document along with the offset of its body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
  /// The parsed mapping. Empty when the document has no front matter.
  pub value:      Value,
  /// Byte offset where the Markdown body begins.
  pub body_start: usize,
}

impl FrontMatter {
  fn empty() -> Self {
    Self {
      value:      Value::Object(Map::new()),
      body_start: 0,
    }
  }

  /// Whether the document carried no front matter keys.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.value.as_object().is_none_or(Map::is_empty)
  }

  /// Slice the body out of the text this front matter was extracted from.
  #[must_use]
  pub fn body<'a>(&self, input: &'a str) -> &'a str {
    input.get(self.body_start..).unwrap_or(input)
  }

  /// Deserialize the mapping into a typed structure.
  ///
  /// # Errors
  ///
  /// Returns an error if the mapping does not fit the target type.
  pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, FrontMatterError> {
    Ok(serde_json::from_value(self.value.clone())?)
  }
}

/// Split a line off `input` at `start`, returning it without its line ending
/// together with the offset of the next line.
fn next_line(input: &str, start: usize) -> Option<(&str, usize)> {
  let rest = input.get(start..).filter(|rest| !rest.is_empty())?;
  let (line, next) = rest
    .find('\n')
    .map_or((rest, input.len()), |pos| (&rest[..pos], start + pos + 1));
  Some((line.trim_end_matches('\r'), next))
}

/// Extract the front matter of a Markdown document.
///
/// # Arguments
///
/// * `input` - The full document text
///
/// # Returns
///
/// The parsed mapping and the body offset. A document without front matter
/// yields an empty mapping and offset zero.
///
/// # Errors
///
/// Returns an error when the block is not closed, is not valid YAML, or its
/// root is not a mapping.
pub fn extract_front_matter(input: &str) -> Result<FrontMatter, FrontMatterError> {
  let mut cursor = if input.starts_with(BOM) {
    BOM.len_utf8()
  } else {
    0
  };

  // Skip blank lines before the opening delimiter.
  let block_start = loop {
    let Some((line, next)) = next_line(input, cursor) else {
      return Ok(FrontMatter::empty());
    };
    if line.trim().is_empty() {
      cursor = next;
      continue;
    }
    if line != DELIMITER {
      return Ok(FrontMatter::empty());
    }
    break next;
  };

  let mut scan = block_start;
  let (block_end, body_start) = loop {
    let Some((line, next)) = next_line(input, scan) else {
      return Err(FrontMatterError::Unterminated);
    };
    if line == DELIMITER {
      break (scan, next);
    }
    scan = next;
  };

  let block = &input[block_start..block_end];
  let value = parse_block(block)?;
  Ok(FrontMatter { value, body_start })
}

fn parse_block(block: &str) -> Result<Value, FrontMatterError> {
  if block.trim().is_empty() {
    return Ok(Value::Object(Map::new()));
  }

  let yaml: serde_yaml::Value = serde_yaml::from_str(block)?;
  match serde_json::to_value(yaml)? {
    Value::Null => Ok(Value::Object(Map::new())),
    value @ Value::Object(_) => Ok(value),
    _ => Err(FrontMatterError::InvalidRootType),
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
  use serde::Deserialize;

  use super::*;

  #[test]
  fn test_no_front_matter() {
    let fm = extract_front_matter("# Title\nBody").unwrap();
    assert!(fm.is_empty());
    assert_eq!(fm.body_start, 0);
  }

  #[test]
  fn test_basic_mapping() {
    let input = "---\ntitle: Rapport\ntoc_depth: 2\n---\n# Content";
    let fm = extract_front_matter(input).unwrap();
    assert_eq!(fm.value["title"], "Rapport");
    assert_eq!(fm.value["toc_depth"], 2);
    assert_eq!(fm.body(input), "# Content");
  }

  #[test]
  fn test_bom_and_leading_blank_lines() {
    let input = "\u{feff}\n  \n---\nfoo: bar\n---\nBody";
    let fm = extract_front_matter(input).unwrap();
    assert_eq!(fm.value["foo"], "bar");
    assert_eq!(fm.body(input), "Body");
  }

  #[test]
  fn test_crlf_delimiters() {
    let input = "---\r\nfoo: bar\r\n---\r\nBody";
    let fm = extract_front_matter(input).unwrap();
    assert_eq!(fm.value["foo"], "bar");
    assert_eq!(fm.body(input), "Body");
  }

  #[test]
  fn test_empty_block() {
    let input = "---\n---\n# Body";
    let fm = extract_front_matter(input).unwrap();
    assert!(fm.is_empty());
    assert_eq!(fm.body(input), "# Body");
  }

  #[test]
  fn test_block_at_end_of_input() {
    let input = "---\ntitle: Only\n---";
    let fm = extract_front_matter(input).unwrap();
    assert_eq!(fm.value["title"], "Only");
    assert_eq!(fm.body(input), "");
  }

  #[test]
  fn test_unterminated() {
    let err = extract_front_matter("---\ntitle: x").unwrap_err();
    assert!(matches!(err, FrontMatterError::Unterminated));
  }

  #[test]
  fn test_invalid_yaml() {
    let err = extract_front_matter("---\nkey: [oops\n---\n").unwrap_err();
    assert!(matches!(err, FrontMatterError::Yaml(_)), "{err:?}");
  }

  #[test]
  fn test_non_mapping_root() {
    let err = extract_front_matter("---\n- a\n- b\n---\n").unwrap_err();
    assert!(matches!(err, FrontMatterError::InvalidRootType));
  }

  #[test]
  fn test_deserialize_typed() {
    #[derive(Deserialize)]
    struct Meta {
      title:  String,
      #[serde(default)]
      header: Option<bool>,
    }

    let fm = extract_front_matter("---\ntitle: T\nheader: false\nextra: 1\n---\n")
      .unwrap();
    let meta: Meta = fm.deserialize().unwrap();
    assert_eq!(meta.title, "T");
    assert_eq!(meta.header, Some(false));
  }
}
