//! Gateway status codes
//!
//! The client only ever treats [`SUCCESS`] as success. The table here is for
//! callers that want to show something more useful than the bare code.

/// The sole success sentinel for every operation
pub const SUCCESS: i32 = 100;

/// Returned by `verify.json` when the transaction was verified before
pub const ALREADY_VERIFIED: i32 = 101;

/// Whether `code` is the success sentinel
pub fn is_success(code: i32) -> bool {
    code == SUCCESS
}

/// Describe a documented gateway status code
pub fn describe(code: i32) -> Option<&'static str> {
    let text = match code {
        -9 => "Validation error",
        -10 => "Terminal is not valid, check merchant_id or IP address",
        -11 => "Terminal is not active",
        -12 => "Too many attempts, try again later",
        -15 => "Terminal has been suspended",
        -16 => "Terminal user level is not valid",
        -30 => "Terminal is not allowed to accept floating wages",
        -31 => "Terminal has no default bank account for floating wages",
        -32 => "Floating wages exceed the total amount",
        -33 => "Floating wage percentages are not valid",
        -34 => "Wages exceed the total amount",
        -35 => "Too many floating wage parties",
        -40 => "Invalid extra parameters",
        -50 => "Paid amount differs from the amount sent to verify",
        -51 => "Session is not valid, the payment was not successful",
        -52 => "Unexpected gateway error, contact support",
        -53 => "Authority does not belong to this merchant",
        -54 => "Invalid authority",
        -55 => "Transaction not found",
        SUCCESS => "Success",
        ALREADY_VERIFIED => "Transaction already verified",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sentinel() {
        assert!(is_success(100));
        assert!(!is_success(ALREADY_VERIFIED));
        assert!(!is_success(-9));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(-54), Some("Invalid authority"));
        assert_eq!(describe(SUCCESS), Some("Success"));
        assert_eq!(describe(-1000), None);
        assert_eq!(describe(0), None);
    }
}
