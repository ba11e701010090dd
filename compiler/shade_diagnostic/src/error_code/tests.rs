use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2005.as_str(), "E2005");
    assert_eq!(ErrorCode::E3003.to_string(), "E3003");
}
