//! Service list loading from a comma-delimited source.
//!
//! ```text
//! name,url
//! billing,https://billing.internal/health
//! search,http://10.0.0.7:9200/
//! ```
//!
//! The header is mandatory. Any malformed row fails the whole load; the
//! monitor never starts with a partial list.

use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Identity of one service as read from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: String,
    pub url: String,
}

impl ServiceSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Error type for service source loading.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read service source: {0}")]
    Io(#[from] std::io::Error),

    #[error("service source is empty, expected a `name,url` header")]
    MissingHeader,

    #[error("service source header: cannot find field '{expected}'")]
    BadHeader { expected: &'static str },

    #[error("service source line {line} is not in `name,url` format")]
    MalformedRow { line: usize },

    #[error("service source line {line}: invalid url '{url}': {reason}")]
    InvalidUrl {
        line: usize,
        url: String,
        reason: url::ParseError,
    },
}

/// Read and parse the service source at `path`.
pub fn load_services(path: &Path) -> Result<Vec<ServiceSpec>, SourceError> {
    let content = fs::read_to_string(path)?;
    let services = parse_services(&content)?;
    tracing::info!(path = %path.display(), services = services.len(), "Service source loaded");
    Ok(services)
}

/// Parse source text into an ordered service list.
pub fn parse_services(content: &str) -> Result<Vec<ServiceSpec>, SourceError> {
    // Spreadsheet exports often start with a UTF-8 byte order mark.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(SourceError::MissingHeader)?;
    let columns = split_row(header);
    if columns.len() < 2 {
        return Err(SourceError::MalformedRow { line: header_line });
    }
    if columns[0] != "name" {
        return Err(SourceError::BadHeader { expected: "name" });
    }
    if columns[1] != "url" {
        return Err(SourceError::BadHeader { expected: "url" });
    }

    let mut services = Vec::new();
    for (line, row) in lines {
        let fields = split_row(row);
        if fields.len() < 2 {
            return Err(SourceError::MalformedRow { line });
        }

        let (name, url) = (fields[0], fields[1]);
        if let Err(reason) = Url::parse(url) {
            return Err(SourceError::InvalidUrl {
                line,
                url: url.to_string(),
                reason,
            });
        }
        services.push(ServiceSpec::new(name, url));
    }

    Ok(services)
}

fn split_row(row: &str) -> Vec<&str> {
    row.split(',').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_services_in_order() {
        let services = parse_services("name,url\na,http://x\nb,http://y\n").unwrap();
        assert_eq!(
            services,
            vec![ServiceSpec::new("a", "http://x"), ServiceSpec::new("b", "http://y")]
        );
    }

    #[test]
    fn test_extra_columns_and_blank_lines_ignored() {
        let content = "name,url,owner\n\n a , http://x/health , team-a\n\n";
        let services = parse_services(content).unwrap();
        assert_eq!(services, vec![ServiceSpec::new("a", "http://x/health")]);
    }

    #[test]
    fn test_row_with_one_field_is_rejected() {
        let err = parse_services("name,url\na,http://x\nbroken\n").unwrap_err();
        assert!(matches!(err, SourceError::MalformedRow { line: 3 }));
    }

    #[test]
    fn test_header_is_required() {
        assert!(matches!(parse_services(""), Err(SourceError::MissingHeader)));
        assert!(matches!(
            parse_services("service,url\na,http://x\n"),
            Err(SourceError::BadHeader { expected: "name" })
        ));
        assert!(matches!(
            parse_services("name,address\na,http://x\n"),
            Err(SourceError::BadHeader { expected: "url" })
        ));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let err = parse_services("name,url\na,/health\n").unwrap_err();
        match err {
            SourceError::InvalidUrl { line, url, .. } => {
                assert_eq!(line, 2);
                assert_eq!(url, "/health");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let services = parse_services("\u{feff}name,url\na,http://x\n").unwrap();
        assert_eq!(services, vec![ServiceSpec::new("a", "http://x")]);
    }

    #[test]
    fn test_header_only_yields_no_services() {
        assert!(parse_services("name,url\n").unwrap().is_empty());
    }

    #[test]
    fn test_load_services_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,url").unwrap();
        writeln!(file, "a,http://x").unwrap();

        let services = load_services(file.path()).unwrap();
        assert_eq!(services.len(), 1);

        let missing = load_services(Path::new("/nonexistent/targets.csv"));
        assert!(matches!(missing, Err(SourceError::Io(_))));
    }
}
