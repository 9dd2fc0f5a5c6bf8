// Key/value parameter store supplying the delta-f mode switches

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Flat name -> value parameter set.
///
/// Readable from a `#`-commented `name = value` text file or from a JSON
/// object of numbers. Only the switches the coefficient machinery consumes
/// are interpreted (`mode`, `df_mode`, `include_baryon`, `hrg_eos`); other
/// entries pass through untouched for the surrounding sampler code.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    values: HashMap<String, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        ParameterSet {
            values: HashMap::new(),
        }
    }

    pub fn set_val(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn exist(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Value of a parameter; missing names are an error so a misspelled
    /// switch cannot silently select a default physics mode.
    pub fn get_val(&self, name: &str) -> Result<f64, Box<dyn Error>> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| format!("Parameter '{}' is not set", name).into())
    }

    /// Parse one `name = value` line, ignoring everything after `#`.
    /// Blank/comment-only lines are accepted and ignored.
    pub fn parse_line(&mut self, line: &str) -> Result<(), Box<dyn Error>> {
        let stripped = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if stripped.trim().is_empty() {
            return Ok(());
        }
        let (name, value) = stripped
            .split_once('=')
            .ok_or_else(|| format!("Expected 'name = value', got '{}'", line.trim()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Missing parameter name in '{}'", line.trim()).into());
        }
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|e| format!("Bad value for parameter '{}': {}", name, e))?;
        self.set_val(name, value);
        Ok(())
    }

    /// Read a parameter file of `name = value` lines.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read parameter file '{}': {}", path.display(), e))?;
        let mut params = ParameterSet::new();
        for (lineno, line) in contents.lines().enumerate() {
            params
                .parse_line(line)
                .map_err(|e| format!("{}:{}: {}", path.display(), lineno + 1, e))?;
        }
        Ok(params)
    }

    /// Read a JSON object of numeric parameters.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read parameter file '{}': {}", path.display(), e))?;
        let values: HashMap<String, f64> = serde_json::from_str(&contents)
            .map_err(|e| format!("Malformed parameter JSON '{}': {}", path.display(), e))?;
        Ok(ParameterSet { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut p = ParameterSet::new();
        p.set_val("df_mode", 2.0);
        assert!(p.exist("df_mode"));
        assert!(!p.exist("mode"));
        assert_eq!(p.get_val("df_mode").unwrap(), 2.0);
        assert!(p.get_val("mode").is_err());
    }

    #[test]
    fn test_parse_line() {
        let mut p = ParameterSet::new();
        p.parse_line("df_mode = 4   # Jonah").unwrap();
        p.parse_line("   ").unwrap();
        p.parse_line("# full-line comment").unwrap();
        p.parse_line("include_baryon=1").unwrap();
        assert_eq!(p.get_val("df_mode").unwrap(), 4.0);
        assert_eq!(p.get_val("include_baryon").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_line_errors() {
        let mut p = ParameterSet::new();
        assert!(p.parse_line("no_equals_sign 3").is_err());
        assert!(p.parse_line("df_mode = abc").is_err());
        assert!(p.parse_line("= 3").is_err());
    }

    #[test]
    fn test_json_parameters() {
        let text = r#"{"df_mode": 1, "hrg_eos": 2}"#;
        let values: HashMap<String, f64> = serde_json::from_str(text).unwrap();
        let p = ParameterSet { values };
        assert_eq!(p.get_val("hrg_eos").unwrap(), 2.0);
    }
}
