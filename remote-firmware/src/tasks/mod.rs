// Task-Modul: Enthält alle Embassy Tasks
//
// Remote-Task → (FrameChannel) → ESP-NOW-Task → (SendStatusSignal) → Status-LED

pub mod espnow;
pub mod remote;
pub mod status_led;

// Re-export Tasks für einfachen Import
pub use espnow::{Radio, espnow_task};
pub use remote::remote_task;
pub use status_led::status_led_task;
