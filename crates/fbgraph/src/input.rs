use crate::prelude::*;
use fbgraph_core::RawResponse;
use std::io::Read;
use std::path::Path;

/// Load a saved response body from a file, or from stdin when no file is given
pub fn read_response(file: Option<&Path>) -> Result<RawResponse> {
    let body = match file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    log::debug!("Read {} bytes of response body", body.len());

    Ok(RawResponse::ok(body))
}

fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| Error::Input {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })
}

fn read_stdin() -> Result<String, Error> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .map_err(|e| Error::Input {
            source_name: "stdin".to_string(),
            message: e.to_string(),
        })?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbgraph_core::HttpResponse;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_response_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"data":[{{"id":"1"}}]}}"#).unwrap();

        let res = read_response(Some(file.path())).unwrap();

        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body_text(), r#"{"data":[{"id":"1"}]}"#);
    }

    #[test]
    fn test_read_response_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = read_response(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
