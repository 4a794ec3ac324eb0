use anansi_core::format::OutputFormat;
use anansi_core::Order;

/// Parse a walk limit; zero would print nothing
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

pub fn parse_order(s: &str) -> std::result::Result<Order, String> {
    s.parse::<Order>().map_err(|e| e.to_string())
}

pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
