use routewise_core::error::{Result, RouteError};
use routewise_core::format::OutputFormat;
use routewise_core::graph::NodeId;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a router list separated by whitespace and/or commas
pub fn parse_node_list(input: &str) -> Result<Vec<NodeId>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<NodeId>()
                .map_err(|_| RouteError::invalid_value("router id", part))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("xml").unwrap_err().contains("unknown format"));
    }

    #[test]
    fn test_parse_spaces_and_commas() {
        assert_eq!(parse_node_list("1 2,3 , 4").unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_node_list("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_node_list("1 two").unwrap_err();
        assert_eq!(err.to_string(), "invalid router id: two");
    }
}
