pub mod origin;
pub mod summit;
pub mod window;

// re-export for cleaner imports
pub use self::origin::Origin;
pub use self::summit::OriginSummit;
pub use self::window::{OriginWindow, WindowCount};
