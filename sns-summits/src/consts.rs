/// Window width used by the upstream counting step.
pub const DEFAULT_WINDOW_WIDTH: u32 = 50;
/// Distance between the starts of neighbouring windows.
pub const DEFAULT_WINDOW_STEP: u32 = 25;
