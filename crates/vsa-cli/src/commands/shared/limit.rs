/// Compute effective page size: explicit argument, else configured default.
/// Zero is treated as "use the default".
#[must_use]
pub fn effective_limit(local: Option<u32>, configured: u32) -> u32 {
    local.filter(|limit| *limit > 0).unwrap_or(configured)
}
