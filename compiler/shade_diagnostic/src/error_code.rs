//! Error codes for all front-end diagnostics.
//!
//! The first digit names the phase that reports the error.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Syntax errors
/// - E2xxx: Semantic and type errors
/// - E3xxx: Strict ES2 restrictions
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Character sequence that forms no token
    E0001,
    /// Integer literal does not fit in 32 bits
    E0002,
    /// Floating-point literal is not finite
    E0003,

    // Syntax Errors (E1xxx)
    /// Unexpected token where a specific token was required
    E1001,
    /// Expected expression
    E1002,
    /// Block not closed before end of file
    E1003,
    /// Expected identifier
    E1004,
    /// Name used as a type is not a type
    E1005,
    /// Malformed or out-of-range array dimension
    E1006,
    /// Unknown layout qualifier
    E1007,
    /// Modifier repeated in one declaration
    E1008,
    /// Unsupported or malformed directive
    E1009,
    /// Nesting exceeds the maximum parse depth
    E1010,
    /// Struct declared without fields
    E1011,
    /// Interface block declared without members
    E1012,
    /// Expected a declaration at top level
    E1013,
    /// Index missing inside `[]`
    E1014,

    // Semantic Errors (E2xxx)
    /// Operand types do not fit the operator or the expected type
    E2001,
    /// Unknown identifier
    E2002,
    /// Unknown type
    E2003,
    /// Conflicting or duplicate declaration
    E2004,
    /// No callable overload for the arguments
    E2005,
    /// Invalid constructor invocation
    E2006,
    /// Expression is not writable
    E2007,
    /// Invalid swizzle or field selection
    E2008,
    /// Invalid index expression or array size
    E2009,
    /// Return statement disagrees with the function's return type
    E2010,
    /// `break` or `continue` outside of a loop
    E2011,
    /// Function or type name used without a call
    E2012,
    /// Constant division by zero
    E2013,
    /// Invalid switch case
    E2014,
    /// Invalid interface block member
    E2015,
    /// Program has no `main` function
    E2016,
    /// Generic function given a body
    E2017,
    /// Unary operator applied to an unsupported type
    E2018,

    // Strict ES2 Errors (E3xxx)
    /// Operator not available in strict ES2 programs
    E3001,
    /// Operator applied to an array in a strict ES2 program
    E3002,
    /// Type not available in strict ES2 programs
    E3003,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E2012 => "E2012",
            ErrorCode::E2013 => "E2013",
            ErrorCode::E2014 => "E2014",
            ErrorCode::E2015 => "E2015",
            ErrorCode::E2016 => "E2016",
            ErrorCode::E2017 => "E2017",
            ErrorCode::E2018 => "E2018",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
