use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const INVALID_AMBIENT_IDENTIFIER_NAME: u32 = 100_001;
    pub const INVALID_MULTI_FUNCTION_USE: u32 = 100_002;
    pub const INVALID_RANGE_USE: u32 = 100_003;
    pub const INVALID_FOR_RANGE_CALL: u32 = 100_004;
    pub const INVALID_OPERATOR_MAPPING_USE: u32 = 100_005;
    pub const INVALID_TABLE_EXTENSION_USE: u32 = 100_006;
}

pub mod diagnostic_messages {
    pub const INVALID_AMBIENT_IDENTIFIER_NAME: &str =
        "Invalid ambient identifier name '{0}'. Ambient identifiers must be valid lua identifiers.";
    pub const INVALID_MULTI_FUNCTION_USE: &str =
        "The $multi function must be called in a return statement.";
    pub const INVALID_RANGE_USE: &str = "$range can only be used in a for...of loop.";
    pub const INVALID_FOR_RANGE_CALL: &str = "Invalid @forRange call: {0}.";
    pub const INVALID_OPERATOR_MAPPING_USE: &str =
        "This function must always be directly called and cannot be referred to.";
    pub const INVALID_TABLE_EXTENSION_USE: &str =
        "This function must be called directly and cannot be referred to.";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_AMBIENT_IDENTIFIER_NAME,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_AMBIENT_IDENTIFIER_NAME,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_MULTI_FUNCTION_USE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_MULTI_FUNCTION_USE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_RANGE_USE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_RANGE_USE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_FOR_RANGE_CALL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_FOR_RANGE_CALL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_OPERATOR_MAPPING_USE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_OPERATOR_MAPPING_USE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_TABLE_EXTENSION_USE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_TABLE_EXTENSION_USE,
    },
];
