//! Fixed identifiers of the legacy command framework
//!
//! The classifier matches these by literal name only. They are not
//! configurable; changing them changes which legacy classes are migrated.

/// Legacy command-family markers
pub mod command {
    /// Interface every legacy controller command implements
    pub const INTERFACE: &str = "ControllerCommand";

    /// Base class most legacy controller commands extend
    pub const BASE_CLASS: &str = "ControllerCommandImpl";

    /// Request-handling entry method
    pub const ENTRY_METHOD: &str = "performExecute";
}

/// Identifiers inspected inside the entry method
pub mod usage {
    /// Response accumulation method (`resp.put(..)`)
    pub const RESPONSE_WRITE_METHOD: &str = "put";

    /// Receiver name of the response property bag
    pub const RESPONSE_RECEIVER: &str = "resp";

    /// Receiver name of the command execution context
    pub const CONTEXT_RECEIVER: &str = "commandContext";

    /// More than this many response writes calls for a facade
    pub const MAX_DIRECT_RESPONSE_WRITES: usize = 1;
}

/// Field names the facade and ImpEx templates understand
pub mod fields {
    pub const ORDER_ID: &str = "orderId";
    pub const USER_ID: &str = "userId";
    pub const PAYMENT_METHOD: &str = "paymentMethod";
}

/// Output defaults
pub mod output {
    /// Package used in generated bean declarations
    pub const DEFAULT_BASE_PACKAGE: &str = "com.example";

    /// `input_type` reported for converted units
    pub const INPUT_TYPE: &str = "ControllerCommand";

    /// Source file extension (matched case-insensitively)
    pub const SOURCE_EXTENSION: &str = "java";
}
