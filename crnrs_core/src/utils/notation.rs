//! Utility functions for writing powers and multiples in rate expressions

/// Write `symbol` raised to `exponent`, eliding an exponent of 1 (`b^2`, `a`)
pub(crate) fn power(symbol: &str, exponent: u32) -> String {
    if exponent == 1 {
        symbol.to_string()
    } else {
        format!("{}^{}", symbol, exponent)
    }
}

/// Write `expression` multiplied by `factor`, eliding a factor of 1 (`k0(a)*2`, `k0(a)`)
pub(crate) fn scaled(expression: &str, factor: u32) -> String {
    if factor == 1 {
        expression.to_string()
    } else {
        format!("{}*{}", expression, factor)
    }
}
