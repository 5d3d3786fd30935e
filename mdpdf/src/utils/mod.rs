use std::{fs, path::Path};

use jiff::civil::Date;
use log::warn;
use mdpdf_commonmark::{
  processor::{data_uri, mime_type_for, scan_headings},
  utils::strip_html_tags,
};
use mdpdf_config::{DateLocale, TemplateSet};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const FRENCH_MONTHS: [&str; 12] = [
  "janvier",
  "février",
  "mars",
  "avril",
  "mai",
  "juin",
  "juillet",
  "août",
  "septembre",
  "octobre",
  "novembre",
  "décembre",
];

const ENGLISH_MONTHS: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

/// Format a date for the `{{DATE}}` placeholder.
///
/// # Arguments
///
/// * `date` - The calendar date to format
/// * `locale` - Language of the month name and field order
///
/// # Returns
///
/// `16 octobre 2026` in French, `October 16, 2026` in English. Days are
/// always written with two digits.
#[must_use]
pub fn format_date(date: Date, locale: DateLocale) -> String {
  let month_index = usize::try_from(date.month() - 1).unwrap_or(0);
  match locale {
    DateLocale::Fr => {
      format!(
        "{:02} {} {}",
        date.day(),
        FRENCH_MONTHS[month_index % 12],
        date.year()
      )
    },
    DateLocale::En => {
      format!(
        "{} {:02}, {}",
        ENGLISH_MONTHS[month_index % 12],
        date.day(),
        date.year()
      )
    },
  }
}

/// Today's date in the local time zone, formatted for `locale`.
#[must_use]
pub fn today(locale: DateLocale) -> String {
  format_date(jiff::Zoned::now().date(), locale)
}

/// Load the logo to print in the header as a data URI.
///
/// An explicit `logo` wins over the template's `logo.png`. A logo that
/// cannot be read is reported and left out.
///
/// # Returns
///
/// The data URI, or an empty string when there is no usable logo
#[must_use]
pub fn load_logo(logo: Option<&Path>, template: &TemplateSet) -> String {
  let Some(path) = logo.or(template.logo.as_deref()) else {
    return String::new();
  };

  match fs::read(path) {
    Ok(bytes) => data_uri(mime_type_for(path), &bytes),
    Err(e) => {
      warn!("Could not read logo {}: {e}", path.display());
      String::new()
    },
  }
}

/// Load the stylesheet of a document.
///
/// An explicit `css` file replaces the template's stylesheet. When it cannot
/// be read, the template's stylesheet is used instead.
#[must_use]
pub fn load_css(css: Option<&Path>, template: &TemplateSet) -> String {
  if let Some(path) = css {
    match fs::read_to_string(path) {
      Ok(content) => return content,
      Err(e) => {
        warn!(
          "Could not read stylesheet {}: {e}, using the template's",
          path.display()
        );
      },
    }
  }
  template.css_source()
}

/// Pick the title of a document.
///
/// The front matter title wins, then the first level-1 heading, then the file
/// name without its extension.
#[must_use]
pub fn document_title(
  front_matter_title: Option<&str>,
  body: &str,
  path: &Path,
) -> String {
  if let Some(title) = front_matter_title.map(str::trim).filter(|t| !t.is_empty())
  {
    return title.to_string();
  }

  if let Some(heading) = scan_headings(body, 1, 1).into_iter().next() {
    let title = strip_html_tags(&heading.title);
    let title = title.trim();
    if !title.is_empty() {
      return title.to_string();
    }
  }

  path
    .file_stem()
    .map(|stem| stem.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Build a `file://` URL for a directory, with a trailing slash so relative
/// references resolve inside it.
#[must_use]
pub fn directory_url(dir: &Path) -> String {
  let absolute = if dir.is_absolute() {
    dir.to_path_buf()
  } else {
    std::env::current_dir()
      .map(|cwd| cwd.join(dir))
      .unwrap_or_else(|_| dir.to_path_buf())
  };

  let mut url = file_url(&absolute);
  if !url.ends_with('/') {
    url.push('/');
  }
  url
}

/// Characters kept as-is in the path of a `file://` URL.
const FILE_URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'/')
  .remove(b':')
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'~');

/// Build a `file://` URL for an absolute path, percent-encoding characters
/// that are not allowed in a URL path.
#[must_use]
pub fn file_url(path: &Path) -> String {
  let raw = path.to_string_lossy().replace('\\', "/");
  let separator = if raw.starts_with('/') { "" } else { "/" };
  format!(
    "file://{separator}{}",
    utf8_percent_encode(&raw, FILE_URL_ENCODE_SET)
  )
}
