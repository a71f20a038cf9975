//! Display-only text for the simulated IoT execution. Nothing here talks to a device.

pub const COMMAND_DISPATCH_NOTICE: &str = "Sending command to field controller... ✅";
pub const FEEDBACK_NOTICE: &str = "Device confirmed action. Logs stored for traceability.";
pub const COMPLETION_NOTICE: &str = "Use case completed!";
