use crate::LacunaError;

/// Parameters for one puzzle instance, one comma-separated line of
/// input: `n,k,a,b,c,r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Total sequence length to produce.
    pub n: u64,
    /// Window size; also the number of generated values.
    pub k: u64,
    /// Generator seed, used verbatim as the first value.
    pub a: u64,
    /// Generator multiplier.
    pub b: u64,
    /// Generator increment.
    pub c: u64,
    /// Generator modulus, must be positive.
    pub r: u64,
}

impl Params {
    /// Parse a trimmed input line. Rejects anything other than exactly
    /// six base-10 integers, and enforces `r >= 1` and `1 <= k <= n`.
    pub fn parse(line: &str) -> Result<Self, LacunaError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(LacunaError::Parse(format!(
                "expected 6 comma-separated fields, got {} in '{line}'",
                fields.len()
            )));
        }
        let mut values = [0u64; 6];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|_| {
                LacunaError::Parse(format!("invalid integer '{field}' in '{line}'"))
            })?;
        }
        let [n, k, a, b, c, r] = values;
        if r == 0 {
            return Err(LacunaError::Parse(format!("modulus must be positive in '{line}'")));
        }
        if k == 0 || k > n {
            return Err(LacunaError::Parse(format!(
                "window size must satisfy 1 <= k <= n, got k={k} n={n}"
            )));
        }
        Ok(Self { n, k, a, b, c, r })
    }
}
