//! Conversion between whole-SOL decimal amounts and lamports.

use crate::error::{Result, WalletError};
use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Parses an operator-entered SOL amount into lamports.
///
/// Accepts any finite, non-negative decimal; the result is rounded to the
/// nearest lamport.
pub fn parse_sol(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let sol: f64 = trimmed
        .parse()
        .map_err(|_| WalletError::Validation(format!("'{}' is not a valid SOL amount", trimmed)))?;

    if !sol.is_finite() || sol.is_sign_negative() {
        return Err(WalletError::Validation(format!(
            "SOL amount must be a finite, non-negative number, got '{}'",
            trimmed
        )));
    }

    let lamports = (sol * LAMPORTS_PER_SOL as f64).round();
    if lamports >= u64::MAX as f64 {
        return Err(WalletError::Validation(format!(
            "SOL amount '{}' is too large",
            trimmed
        )));
    }

    Ok(lamports as u64)
}

/// Renders lamports as a plain SOL decimal, e.g. `2500000000` as `2.5`.
pub fn format_sol(lamports: u64) -> String {
    (lamports as f64 / LAMPORTS_PER_SOL as f64).to_string()
}
